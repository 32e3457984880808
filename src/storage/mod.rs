//! Fail-soft persistence.
//!
//! `Storage` wraps a [`KeyValueStore`] and namespaces keys per game
//! (`blamegame.players`, `hookhunt.playerId`, ...). Reads that fail or find
//! garbage return the caller's default; writes that fail are logged and
//! dropped. No storage error ever reaches the caller.

pub mod store;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::core::{GameId, StorageError};

pub use store::{FileStore, KeyValueStore, MemoryStore, UnavailableStore};

/// Persisted values, one key each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Players,
    Language,
    AnimationsEnabled,
    GameMode,
    ManualCategorySelection,
    SelectedCategories,
    HubPlayerId,
}

impl StorageKey {
    /// Key name without the game prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Players => "players",
            Self::Language => "language",
            Self::AnimationsEnabled => "animationsEnabled",
            Self::GameMode => "gameMode",
            Self::ManualCategorySelection => "manualCategorySelection",
            Self::SelectedCategories => "selectedCategories",
            Self::HubPlayerId => "playerId",
        }
    }
}

/// Namespaced, fail-soft access to a store.
///
/// ```
/// use blame_game::core::GameId;
/// use blame_game::storage::{MemoryStore, Storage, StorageKey};
///
/// let mut storage = Storage::new(MemoryStore::new(), GameId::BlameGame);
/// assert!(storage.load_or(StorageKey::AnimationsEnabled, true));
///
/// storage.save(StorageKey::AnimationsEnabled, &false);
/// assert!(!storage.load_or(StorageKey::AnimationsEnabled, true));
/// ```
#[derive(Debug)]
pub struct Storage<S> {
    store: S,
    game: GameId,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S, game: GameId) -> Self {
        Self { store, game }
    }

    #[must_use]
    pub fn game(&self) -> GameId {
        self.game
    }

    /// Full key as written to the store.
    #[must_use]
    pub fn full_key(&self, key: StorageKey) -> String {
        format!("{}.{}", self.game.as_str(), key.name())
    }

    /// Read and decode `key`, or `default` if missing, unreadable or corrupt.
    pub fn load_or<T: DeserializeOwned>(&self, key: StorageKey, default: T) -> T {
        let full_key = self.full_key(key);
        let text = match self.store.get(&full_key) {
            Ok(Some(text)) => text,
            Ok(None) => return default,
            Err(err) => {
                warn!(key = %full_key, %err, "error reading from storage, using default");
                return default;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = %full_key, %err, "stored value is corrupt, using default");
                default
            }
        }
    }

    /// Encode and write `value`. Failures are logged and ignored.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: StorageKey, value: &T) {
        let full_key = self.full_key(key);
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|text| self.store.set(&full_key, text));

        if let Err(err) = result {
            warn!(key = %full_key, %err, "error saving to storage");
        }
    }

    /// Delete `key`. Failures are logged and ignored.
    pub fn remove(&mut self, key: StorageKey) {
        let full_key = self.full_key(key);
        if let Err(err) = self.store.remove(&full_key) {
            warn!(key = %full_key, %err, "error removing from storage");
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
