//! Return-to-hub integration.
//!
//! A hub page launches a game with `?playerId=...&returnUrl=...`. The game
//! remembers the player id and, when the player leaves, hands the hub a
//! result record. Decoding the query string and building the final URL is
//! the presentation layer's job; the return URL is passed through unchecked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GameId;
use crate::storage::{KeyValueStore, Storage, StorageKey};

/// Query parameter carrying the hub's player id.
pub const PLAYER_ID_PARAM: &str = "playerId";
/// Query parameter carrying the URL to return to.
pub const RETURN_URL_PARAM: &str = "returnUrl";

/// Inbound hub context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubLink {
    pub player_id: Option<String>,
    pub return_url: Option<String>,
}

impl HubLink {
    /// Read the hub parameters from decoded query pairs.
    ///
    /// Empty values count as absent. Later duplicates override earlier ones.
    pub fn from_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut link = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                PLAYER_ID_PARAM => link.player_id = Some(value),
                RETURN_URL_PARAM => link.return_url = Some(value),
                _ => {}
            }
        }
        link
    }

    /// Remember the inbound player id for this game.
    ///
    /// Without an inbound id, the previously stored one is adopted.
    pub fn remember_player<S: KeyValueStore>(&mut self, storage: &mut Storage<S>) {
        match &self.player_id {
            Some(id) => {
                debug!(player_id = %id, game = %storage.game(), "storing hub player id");
                storage.save(StorageKey::HubPlayerId, id);
            }
            None => self.player_id = storage.load_or(StorageKey::HubPlayerId, None),
        }
    }

    /// Whether there is somewhere to return to.
    #[must_use]
    pub fn can_return(&self) -> bool {
        self.return_url.is_some()
    }

    /// Build the record handed back to the hub.
    #[must_use]
    pub fn result(&self, game: GameId, score: i64) -> HubResult {
        self.result_at(game, score, Utc::now())
    }

    #[must_use]
    pub fn result_at(&self, game: GameId, score: i64, played_at: DateTime<Utc>) -> HubResult {
        HubResult {
            player_id: self.player_id.clone().unwrap_or_default(),
            game_id: game,
            score,
            played_at,
        }
    }
}

/// Outbound result, appended to the return URL as query parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubResult {
    pub player_id: String,
    pub game_id: GameId,
    pub score: i64,
    pub played_at: DateTime<Utc>,
}

impl HubResult {
    /// Key/value pairs for the return URL, in the order the hub expects.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (PLAYER_ID_PARAM, self.player_id.clone()),
            ("gameId", self.game_id.as_str().to_string()),
            ("score", self.score.to_string()),
            ("playedAt", self.played_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    #[test]
    fn test_from_query_pairs() {
        let link = HubLink::from_query_pairs([
            ("playerId", "p-42"),
            ("returnUrl", "https://hub.example/done"),
            ("other", "x"),
        ]);

        assert_eq!(link.player_id.as_deref(), Some("p-42"));
        assert_eq!(link.return_url.as_deref(), Some("https://hub.example/done"));
        assert!(link.can_return());
    }

    #[test]
    fn test_empty_values_ignored() {
        let link = HubLink::from_query_pairs([("playerId", ""), ("returnUrl", "")]);
        assert_eq!(link, HubLink::default());
        assert!(!link.can_return());
    }

    #[test]
    fn test_remember_player() {
        let mut storage = Storage::new(MemoryStore::new(), GameId::HookHunt);

        let mut inbound = HubLink::from_query_pairs([("playerId", "p-7")]);
        inbound.remember_player(&mut storage);

        let mut later = HubLink::default();
        later.remember_player(&mut storage);
        assert_eq!(later.player_id.as_deref(), Some("p-7"));
    }

    #[test]
    fn test_result_query_pairs() {
        let link = HubLink::from_query_pairs([("playerId", "p-1")]);
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let result = link.result_at(GameId::HookHunt, 0, at);

        assert_eq!(
            result.query_pairs(),
            vec![
                ("playerId", "p-1".to_string()),
                ("gameId", "hookhunt".to_string()),
                ("score", "0".to_string()),
                ("playedAt", "2026-01-02T03:04:05.000Z".to_string()),
            ]
        );
    }
}
