//! Question and category data.

use serde::{Deserialize, Serialize};

/// Emoji shown for a category that does not define one.
pub const FALLBACK_CATEGORY_EMOJI: &str = "📋";

/// A single prompt, tagged with its category.
///
/// The text doubles as the question's identity for "already played"
/// tracking. Two categories containing the same wording are treated as
/// one question.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub category_id: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_emoji: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        category_id: impl Into<String>,
        category_name: impl Into<String>,
        category_emoji: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category_id: category_id.into(),
            category_name: category_name.into(),
            category_emoji: category_emoji.into(),
        }
    }
}

/// Per-category aggregate derived from the loaded questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub emoji: String,
    pub name: String,
    pub question_count: usize,
}

impl CategorySummary {
    /// Start a summary from the first question seen in a category.
    ///
    /// Missing emoji and name fall back to `📋` and the category id.
    #[must_use]
    pub fn first_of(question: &Question) -> Self {
        let emoji = if question.category_emoji.is_empty() {
            FALLBACK_CATEGORY_EMOJI.to_string()
        } else {
            question.category_emoji.clone()
        };
        let name = if question.category_name.is_empty() {
            question.category_id.clone()
        } else {
            question.category_name.clone()
        };

        Self {
            id: question.category_id.clone(),
            emoji,
            name,
            question_count: 1,
        }
    }
}
