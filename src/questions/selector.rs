//! Random category selection.

use rustc_hash::FxHashSet;

use crate::core::GameRng;

/// Pick up to `count` distinct category ids at random.
///
/// Duplicates in `all_category_ids` are removed first (keeping first-seen
/// order), `count` is clamped to the number of distinct ids, and the result
/// is the head of a uniform shuffle.
///
/// ```
/// use blame_game::core::GameRng;
/// use blame_game::questions::select_random_categories;
///
/// let mut rng = GameRng::new(1);
/// let picked = select_random_categories(&["a", "b", "a", "c"], 5, &mut rng);
///
/// assert_eq!(picked.len(), 3);
/// ```
pub fn select_random_categories<S: AsRef<str>>(
    all_category_ids: &[S],
    count: usize,
    rng: &mut GameRng,
) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut unique: Vec<String> = all_category_ids
        .iter()
        .map(|s| s.as_ref())
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect();

    let take = count.min(unique.len());
    rng.shuffle(&mut unique);
    unique.truncate(take);
    unique
}
