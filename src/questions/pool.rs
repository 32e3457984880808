//! Question pool.
//!
//! Holds every loaded prompt and answers the two questions the setup and
//! round screens ask: which categories exist (with counts), and which
//! prompts have not been played yet.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::question::{CategorySummary, Question};

/// All loaded questions, in content order.
///
/// ## Example
///
/// ```
/// use blame_game::questions::{Question, QuestionPool};
///
/// let mut pool = QuestionPool::new();
/// pool.load(vec![
///     Question::new("Who is always late?", "daily", "Daily", "⏰"),
///     Question::new("Who snores?", "daily", "Daily", "⏰"),
///     Question::new("Who would survive a zombie attack?", "fantasy", "Fantasy", "🧟"),
/// ]);
///
/// let categories = pool.categories_with_counts();
/// assert_eq!(categories[0].question_count, 2);
/// assert_eq!(categories[1].question_count, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full content set.
    ///
    /// Texts shared between categories are kept but logged: played
    /// tracking keys on text, so such questions are conflated.
    pub fn load(&mut self, questions: Vec<Question>) {
        let mut owners: FxHashMap<&str, &str> = FxHashMap::default();
        for q in &questions {
            if let Some(first) = owners.insert(q.text.as_str(), q.category_id.as_str()) {
                if first != q.category_id {
                    warn!(
                        text = %q.text,
                        first_category = first,
                        category = %q.category_id,
                        "question text appears in several categories and will be treated as one"
                    );
                }
            }
        }

        debug!(count = questions.len(), "question pool loaded");
        self.questions = questions;
    }

    /// Categories with their question counts, in first-seen order.
    ///
    /// The order follows the content and carries no meaning; callers that
    /// need a particular order must sort.
    #[must_use]
    pub fn categories_with_counts(&self) -> Vec<CategorySummary> {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut summaries: Vec<CategorySummary> = Vec::new();

        for q in &self.questions {
            match index.get(q.category_id.as_str()) {
                Some(&i) => summaries[i].question_count += 1,
                None => {
                    index.insert(q.category_id.as_str(), summaries.len());
                    summaries.push(CategorySummary::first_of(q));
                }
            }
        }

        summaries
    }

    /// Distinct category ids, in first-seen order.
    #[must_use]
    pub fn category_ids(&self) -> Vec<String> {
        self.categories_with_counts().into_iter().map(|c| c.id).collect()
    }

    /// Every question whose text is not in `played`.
    #[must_use]
    pub fn available_questions(&self, played: &FxHashSet<String>) -> Vec<Question> {
        if played.is_empty() {
            return self.questions.clone();
        }
        self.questions
            .iter()
            .filter(|q| !played.contains(&q.text))
            .cloned()
            .collect()
    }

    /// Every question belonging to one of `category_ids`, in content order.
    #[must_use]
    pub fn questions_in_categories<S: AsRef<str>>(&self, category_ids: &[S]) -> Vec<Question> {
        let wanted: FxHashSet<&str> = category_ids.iter().map(|s| s.as_ref()).collect();
        self.questions
            .iter()
            .filter(|q| wanted.contains(q.category_id.as_str()))
            .cloned()
            .collect()
    }

    /// All questions in content order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, cat: &str) -> Question {
        Question::new(text, cat, cat.to_uppercase(), "")
    }

    fn sample() -> QuestionPool {
        let mut pool = QuestionPool::new();
        pool.load(vec![
            q("q1", "a"),
            q("q2", "a"),
            q("q3", "b"),
            q("q4", "b"),
            q("q5", "c"),
        ]);
        pool
    }

    #[test]
    fn test_categories_with_counts() {
        let counts: Vec<_> = sample()
            .categories_with_counts()
            .into_iter()
            .map(|c| (c.id, c.question_count))
            .collect();

        assert_eq!(
            counts,
            vec![("a".to_string(), 2), ("b".to_string(), 2), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut pool = QuestionPool::new();
        pool.load(vec![q("x", "z"), q("y", "a"), q("w", "z")]);

        assert_eq!(pool.category_ids(), vec!["z", "a"]);
    }

    #[test]
    fn test_available_questions() {
        let pool = sample();

        let none = FxHashSet::default();
        assert_eq!(pool.available_questions(&none).len(), 5);

        let played: FxHashSet<String> = ["q1", "q4", "unknown"].iter().map(|s| s.to_string()).collect();
        let texts: Vec<_> = pool.available_questions(&played).into_iter().map(|q| q.text).collect();
        assert_eq!(texts, vec!["q2", "q3", "q5"]);
    }

    #[test]
    fn test_shared_text_is_conflated() {
        let mut pool = QuestionPool::new();
        pool.load(vec![q("same", "a"), q("same", "b")]);

        let played: FxHashSet<String> = std::iter::once("same".to_string()).collect();
        assert!(pool.available_questions(&played).is_empty());
    }

    #[test]
    fn test_questions_in_categories() {
        let pool = sample();
        let texts: Vec<_> = pool
            .questions_in_categories(&["c", "a"])
            .into_iter()
            .map(|q| q.text)
            .collect();
        assert_eq!(texts, vec!["q1", "q2", "q5"]);

        assert!(pool.questions_in_categories::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_load_replaces() {
        let mut pool = sample();
        pool.load(vec![q("only", "d")]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.category_ids(), vec!["d"]);
    }
}
