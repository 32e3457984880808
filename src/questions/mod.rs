//! Question system: prompts, categories, pool, random category picks.
//!
//! ## Key Types
//!
//! - `Question`: Prompt text tagged with category id, name and emoji
//! - `CategorySummary`: Derived per-category question count
//! - `QuestionPool`: Loaded content plus played-text filtering
//!
//! Played tracking keys on question text, not on an id. Identical wording
//! in two categories counts as one question.

pub mod content;
pub mod pool;
pub mod question;
pub mod selector;

pub use content::{parse_categories, CategoryContent};
pub use pool::QuestionPool;
pub use question::{CategorySummary, Question, FALLBACK_CATEGORY_EMOJI};
pub use selector::select_random_categories;
