//! Player name rules.

use super::Player;
use crate::core::ValidationError;

/// Normalize a name for duplicate comparison.
fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate `name` against the roster and return it trimmed.
///
/// The name must be non-empty after trimming, at most `max_len` characters,
/// and must not match any existing name case-insensitively. Players in
/// `existing` are compared by their trimmed names too.
pub fn validate_player_name<'a>(
    name: &str,
    existing: impl IntoIterator<Item = &'a Player>,
    max_len: usize,
) -> Result<String, ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len > max_len {
        return Err(ValidationError::TooLong { max: max_len, len });
    }

    let folded = fold(trimmed);
    if existing.into_iter().any(|p| fold(&p.name) == folded) {
        return Err(ValidationError::Duplicate(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}
