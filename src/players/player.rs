//! Player identification.
//!
//! ## PlayerId
//!
//! String identifier of the form `player{n}`. Ids are opaque to the rest of
//! the crate; the registry only guarantees they are unique in its roster.

use serde::{Deserialize, Serialize};

/// Player identifier, unique and stable for the lifetime of a roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the `n`th allocation.
    #[must_use]
    pub fn numbered(n: u64) -> Self {
        Self(format!("player{n}"))
    }

    /// The allocation number, if this id was produced by [`PlayerId::numbered`].
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.0.strip_prefix("player")?.parse().ok()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A named participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_ids() {
        let id = PlayerId::numbered(7);
        assert_eq!(id.as_str(), "player7");
        assert_eq!(id.number(), Some(7));
        assert_eq!(format!("{}", id), "player7");
    }

    #[test]
    fn test_foreign_ids_have_no_number() {
        assert_eq!(PlayerId::new("player1700000000000").number(), Some(1_700_000_000_000));
        assert_eq!(PlayerId::new("hub-user-3").number(), None);
        assert_eq!(PlayerId::new("playerX").number(), None);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::numbered(1), "Alice");
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(json, r#"{"id":"player1","name":"Alice"}"#);

        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }
}
