//! Error types.
//!
//! `ValidationError` is the user-facing kind: the presentation layer shows
//! its message next to the name input. Exhaustion of the round sequencer is
//! not an error and lives in [`crate::rounds::NextRound`].

use thiserror::Error;

use super::config::GameMode;
use crate::players::PlayerId;

/// A rejected player name. Never mutates the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("player name must not be empty")]
    Empty,
    #[error("player name may be at most {max} characters (got {len})")]
    TooLong { max: usize, len: usize },
    #[error("a player named {0:?} already exists")]
    Duplicate(String),
}

/// Failures of roster and session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),
    #[error("{mode} needs at least {required} players, have {actual}")]
    NotEnoughPlayers {
        mode: GameMode,
        required: usize,
        actual: usize,
    },
    #[error("a player cannot blame themselves")]
    SelfBlame,
    #[error("blaming is only available in NameBlame mode")]
    BlameNotAvailable,
    #[error("no round is in progress")]
    NoActiveRound,
    #[error("no questions available for the selected categories")]
    NoQuestions,
}

/// Key-value storage failures. These stop at the `Storage` boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage is unavailable")]
    Unavailable,
}

/// Failures while parsing question content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("question content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("category {0:?} has no questions")]
    EmptyCategory(String),
}
