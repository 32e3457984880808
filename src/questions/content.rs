//! Static question content.
//!
//! Content ships as a JSON array of categories:
//!
//! ```json
//! [
//!   { "id": "work", "name": "Work", "emoji": "💼",
//!     "questions": ["Who replies-all the most?"] }
//! ]
//! ```
//!
//! Loading flattens it into [`Question`]s in file order.

use serde::Deserialize;
use tracing::debug;

use super::question::Question;
use crate::core::ContentError;

/// One category as stored in the content files.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryContent {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub questions: Vec<String>,
}

impl CategoryContent {
    /// Flatten into questions. Texts are trimmed; blank ones are skipped.
    pub fn into_questions(self) -> Result<Vec<Question>, ContentError> {
        let questions: Vec<Question> = self
            .questions
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| Question::new(t, &self.id, &self.name, &self.emoji))
            .collect();

        if questions.is_empty() {
            return Err(ContentError::EmptyCategory(self.id));
        }
        Ok(questions)
    }
}

/// Parse a JSON category list into questions.
pub fn parse_categories(json: &str) -> Result<Vec<Question>, ContentError> {
    let categories: Vec<CategoryContent> = serde_json::from_str(json)?;
    let category_count = categories.len();

    let mut questions = Vec::new();
    for category in categories {
        questions.extend(category.into_questions()?);
    }

    debug!(categories = category_count, questions = questions.len(), "parsed question content");
    Ok(questions)
}
