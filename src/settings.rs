//! User preferences and roster persistence.
//!
//! Preferences are loaded once at startup and written back whenever a
//! setter changes them. Passing the `Storage` explicitly keeps them an
//! ordinary value rather than ambient global state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameMode, Language, SessionConfig};
use crate::players::{Player, PlayerRegistry};
use crate::storage::{KeyValueStore, Storage, StorageKey};

/// Process-wide user preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub animations_enabled: bool,
    pub game_mode: GameMode,
    pub manual_category_selection: bool,
    pub selected_categories: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::default(),
            animations_enabled: true,
            game_mode: GameMode::default(),
            manual_category_selection: false,
            selected_categories: Vec::new(),
        }
    }
}

impl Preferences {
    /// Read every preference, falling back to defaults individually.
    pub fn load<S: KeyValueStore>(storage: &Storage<S>) -> Self {
        let defaults = Self::default();
        let prefs = Self {
            language: storage.load_or(StorageKey::Language, defaults.language),
            animations_enabled: storage.load_or(StorageKey::AnimationsEnabled, defaults.animations_enabled),
            game_mode: storage.load_or(StorageKey::GameMode, defaults.game_mode),
            manual_category_selection: storage
                .load_or(StorageKey::ManualCategorySelection, defaults.manual_category_selection),
            selected_categories: storage.load_or(StorageKey::SelectedCategories, defaults.selected_categories),
        };
        debug!(?prefs, game = %storage.game(), "preferences loaded");
        prefs
    }

    pub fn set_language<S: KeyValueStore>(&mut self, storage: &mut Storage<S>, language: Language) {
        if self.language != language {
            self.language = language;
            storage.save(StorageKey::Language, &self.language);
        }
    }

    /// Flip the animation toggle and return the new value.
    pub fn toggle_animations<S: KeyValueStore>(&mut self, storage: &mut Storage<S>) -> bool {
        self.animations_enabled = !self.animations_enabled;
        storage.save(StorageKey::AnimationsEnabled, &self.animations_enabled);
        self.animations_enabled
    }

    pub fn set_game_mode<S: KeyValueStore>(&mut self, storage: &mut Storage<S>, mode: GameMode) {
        if self.game_mode != mode {
            self.game_mode = mode;
            storage.save(StorageKey::GameMode, &self.game_mode);
        }
    }

    pub fn set_manual_category_selection<S: KeyValueStore>(&mut self, storage: &mut Storage<S>, enabled: bool) {
        if self.manual_category_selection != enabled {
            self.manual_category_selection = enabled;
            storage.save(StorageKey::ManualCategorySelection, &enabled);
        }
    }

    pub fn set_selected_categories<S: KeyValueStore>(&mut self, storage: &mut Storage<S>, categories: Vec<String>) {
        if self.selected_categories != categories {
            self.selected_categories = categories;
            storage.save(StorageKey::SelectedCategories, &self.selected_categories);
        }
    }
}

/// Write the roster in display order.
pub fn save_roster<S: KeyValueStore>(storage: &mut Storage<S>, registry: &PlayerRegistry) {
    storage.save(StorageKey::Players, registry.players());
}

/// Restore the roster under `config`'s name limit; an empty one if
/// nothing usable is stored.
pub fn load_roster<S: KeyValueStore>(storage: &Storage<S>, config: &SessionConfig) -> PlayerRegistry {
    let players: Vec<Player> = storage.load_or(StorageKey::Players, Vec::new());
    PlayerRegistry::from_players(players, config.max_name_len)
}
