//! Core types: RNG, errors, configuration.
//!
//! Everything else in the crate builds on these; none of them know about
//! players or questions beyond the ids they carry in error values.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameId, GameMode, Language, SessionConfig, DEFAULT_RANDOM_CATEGORY_COUNT, MAX_NAME_LEN};
pub use error::{ContentError, GameError, StorageError, ValidationError};
pub use rng::{GameRng, GameRngState};
