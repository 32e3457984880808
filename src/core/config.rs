//! Game configuration types.
//!
//! - `GameMode`: Classic or NameBlame, with their minimum roster sizes
//! - `Language`: UI locale preference
//! - `GameId`: which game a storage namespace belongs to
//! - `SessionConfig`: name limit, random category count, RNG seed

use serde::{Deserialize, Serialize};

/// Maximum length of a player name, in characters, after trimming.
pub const MAX_NAME_LEN: usize = 20;

/// Default number of categories drawn when the player does not pick them.
pub const DEFAULT_RANDOM_CATEGORY_COUNT: usize = 10;

/// How rounds are played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// No designated blamer; anyone advances rounds.
    #[default]
    Classic,
    /// Each round the active player blames another named player.
    NameBlame,
}

impl GameMode {
    /// Smallest roster this mode can start with.
    #[must_use]
    pub const fn min_players(self) -> usize {
        match self {
            Self::Classic => 2,
            Self::NameBlame => 3,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::NameBlame => write!(f, "nameblame"),
        }
    }
}

/// UI language preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// Parse a locale tag such as `"en-US"` or `"de"`.
    ///
    /// Unknown tags yield `None`; callers keep their current language.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "de" => Some(Self::De),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// The two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }
}

/// Which game owns a storage namespace or hub result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    BlameGame,
    HookHunt,
}

impl GameId {
    /// Identifier used as storage key prefix and hub `gameId`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlameGame => "blamegame",
            Self::HookHunt => "hookhunt",
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session tunables.
///
/// ```
/// use blame_game::core::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_random_category_count(4)
///     .with_seed(42);
///
/// assert_eq!(config.max_name_len, 20);
/// assert_eq!(config.random_category_count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Longest allowed player name after trimming.
    pub max_name_len: usize,

    /// Categories drawn when manual selection is off.
    pub random_category_count: usize,

    /// Fixed seed for reproducible sessions. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_name_len: MAX_NAME_LEN,
            random_category_count: DEFAULT_RANDOM_CATEGORY_COUNT,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum name length.
    #[must_use]
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// Set the number of randomly drawn categories.
    #[must_use]
    pub fn with_random_category_count(mut self, count: usize) -> Self {
        self.random_category_count = count;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG for a session from the configured seed.
    #[must_use]
    pub fn rng(&self) -> super::GameRng {
        match self.seed {
            Some(seed) => super::GameRng::new(seed),
            None => super::GameRng::from_entropy(),
        }
    }
}
