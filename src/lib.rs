//! # blame-game
//!
//! Session and round-selection core for the BlameGame party games.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Every shuffle takes a `GameRng`, so a fixed
//!    seed replays a session exactly for a given `rand` version and
//!    pointer width.
//!
//! 2. **Exhaust once**: Within one session no question text is shown twice.
//!    Played tracking keys on the text, so identical wording in two
//!    categories is one question.
//!
//! 3. **Fail-soft persistence**: Storage problems degrade to defaults and a
//!    `warn!` log line; they never surface as errors.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, configuration
//! - `players`: Player ids, name validation, roster
//! - `questions`: Questions, categories, pool, random category picks, content
//! - `rounds`: Round sequencer state machine
//! - `storage`: Key-value backends and the fail-soft `Storage` wrapper
//! - `settings`: Persisted user preferences and roster
//! - `hub`: Return-to-hub query parameters and result record
//! - `session`: A full play-through including NameBlame blames

pub mod core;
pub mod players;
pub mod questions;
pub mod rounds;
pub mod storage;
pub mod settings;
pub mod hub;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    GameId, GameMode, Language, SessionConfig,
    GameError, ValidationError, StorageError, ContentError,
};

pub use crate::players::{Player, PlayerId, PlayerRegistry};

pub use crate::questions::{
    CategorySummary, Question, QuestionPool,
    parse_categories, select_random_categories,
};

pub use crate::rounds::{NextRound, RoundSequencer, SequencerState};

pub use crate::storage::{FileStore, KeyValueStore, MemoryStore, Storage, StorageKey};

pub use crate::settings::{Preferences, load_roster, save_roster};

pub use crate::hub::{HubLink, HubResult};

pub use crate::session::{Blame, CategorySelection, GameSession, SessionSummary};
