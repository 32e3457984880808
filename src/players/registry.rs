//! Player roster.
//!
//! The `PlayerRegistry` holds the ordered list of players for the setup
//! screen. Insertion order is display order and, in NameBlame mode, the
//! order in which players take turns blaming.

use tracing::{debug, warn};

use super::player::{Player, PlayerId};
use super::validation::validate_player_name;
use crate::core::{GameError, GameMode, SessionConfig, ValidationError, MAX_NAME_LEN};

/// Ordered roster with validated, unique names.
///
/// ## Example
///
/// ```
/// use blame_game::players::PlayerRegistry;
/// use blame_game::core::GameMode;
///
/// let mut registry = PlayerRegistry::new();
/// registry.add_player("Alice").unwrap();
/// registry.add_player("Bob").unwrap();
///
/// assert!(registry.add_player("alice").is_err());
/// assert!(registry.can_start(GameMode::Classic));
/// assert!(!registry.can_start(GameMode::NameBlame));
/// ```
#[derive(Clone, Debug)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    next_id: u64,
    max_name_len: usize,
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::with_max_name_len(MAX_NAME_LEN)
    }
}

impl PlayerRegistry {
    /// Create an empty roster with the default name limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty roster with a custom name limit.
    #[must_use]
    pub fn with_max_name_len(max_name_len: usize) -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
            max_name_len,
        }
    }

    /// Create an empty roster with the name limit from `config`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::with_max_name_len(config.max_name_len)
    }

    /// Rebuild a roster from persisted players.
    ///
    /// Entries that fail validation against `max_name_len` or reuse an id
    /// are dropped. The id counter resumes past the highest numbered id seen.
    pub fn from_players(players: impl IntoIterator<Item = Player>, max_name_len: usize) -> Self {
        let mut registry = Self::with_max_name_len(max_name_len);

        for player in players {
            if registry.get(&player.id).is_some() {
                warn!(id = %player.id, "dropping persisted player with duplicate id");
                continue;
            }
            match validate_player_name(&player.name, &registry.players, registry.max_name_len) {
                Ok(name) => {
                    if let Some(n) = player.id.number() {
                        registry.next_id = registry.next_id.max(n.saturating_add(1));
                    }
                    registry.players.push(Player::new(player.id, name));
                }
                Err(err) => {
                    warn!(id = %player.id, %err, "dropping persisted player with invalid name");
                }
            }
        }

        registry
    }

    /// Validate `name` and append a new player.
    pub fn add_player(&mut self, name: &str) -> Result<Player, ValidationError> {
        let name = validate_player_name(name, &self.players, self.max_name_len)?;
        let player = Player::new(self.alloc_id(), name);

        debug!(id = %player.id, name = %player.name, "player added");
        self.players.push(player.clone());
        Ok(player)
    }

    /// Remove the player with `id`. Unknown ids are ignored.
    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| &p.id == id)?;
        let removed = self.players.remove(idx);
        debug!(id = %removed.id, "player removed");
        Some(removed)
    }

    /// Change a player's name, re-running the add-time validation.
    ///
    /// The player being renamed is excluded from the duplicate check, so
    /// changing only the case of a name is allowed.
    pub fn rename_player(&mut self, id: &PlayerId, name: &str) -> Result<(), GameError> {
        let idx = self
            .players
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| GameError::UnknownPlayer(id.clone()))?;

        let others = self.players.iter().filter(|p| &p.id != id);
        let name = validate_player_name(name, others, self.max_name_len)?;

        debug!(%id, %name, "player renamed");
        self.players[idx].name = name;
        Ok(())
    }

    /// Whether the roster is large enough for `mode`.
    #[must_use]
    pub fn can_start(&self, mode: GameMode) -> bool {
        self.players.len() >= mode.min_players()
    }

    /// Players in display order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Remove every player. The id counter keeps running.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    fn alloc_id(&mut self) -> PlayerId {
        loop {
            let id = PlayerId::numbered(self.next_id);
            // An exhausted counter starts over at 1; ids in use are skipped
            self.next_id = self.next_id.checked_add(1).unwrap_or(1);
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut registry = PlayerRegistry::new();

        let a = registry.add_player("Alice").unwrap();
        let b = registry.add_player("Bob").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.players()[0].name, "Alice");
        assert_eq!(registry.players()[1].name, "Bob");
    }

    #[test]
    fn test_add_rejections_leave_roster_unchanged() {
        let mut registry = PlayerRegistry::new();
        registry.add_player("Alice").unwrap();

        assert_eq!(registry.add_player(""), Err(ValidationError::Empty));
        assert!(matches!(registry.add_player(" ALICE "), Err(ValidationError::Duplicate(_))));
        assert!(matches!(
            registry.add_player(&"x".repeat(21)),
            Err(ValidationError::TooLong { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut registry = PlayerRegistry::new();
        let a = registry.add_player("Alice").unwrap();
        registry.remove_player(&a.id);

        let b = registry.add_player("Alice").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut registry = PlayerRegistry::new();
        registry.add_player("Alice").unwrap();

        assert!(registry.remove_player(&PlayerId::new("nobody")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rename() {
        let mut registry = PlayerRegistry::new();
        let a = registry.add_player("Alice").unwrap();
        registry.add_player("Bob").unwrap();

        // Case change of own name is fine
        registry.rename_player(&a.id, "ALICE").unwrap();
        assert_eq!(registry.get(&a.id).unwrap().name, "ALICE");

        // Taking someone else's name is not
        assert_eq!(
            registry.rename_player(&a.id, "bob"),
            Err(GameError::Validation(ValidationError::Duplicate("bob".into())))
        );
        assert_eq!(registry.get(&a.id).unwrap().name, "ALICE");

        assert_eq!(
            registry.rename_player(&PlayerId::new("ghost"), "Casper"),
            Err(GameError::UnknownPlayer(PlayerId::new("ghost")))
        );
    }

    #[test]
    fn test_can_start() {
        let mut registry = PlayerRegistry::new();
        assert!(!registry.can_start(GameMode::Classic));

        registry.add_player("A").unwrap();
        registry.add_player("B").unwrap();
        assert!(registry.can_start(GameMode::Classic));
        assert!(!registry.can_start(GameMode::NameBlame));

        registry.add_player("C").unwrap();
        assert!(registry.can_start(GameMode::NameBlame));
    }

    #[test]
    fn test_from_players_drops_bad_entries() {
        let registry = PlayerRegistry::from_players(
            vec![
                Player::new(PlayerId::numbered(4), "Alice"),
                Player::new(PlayerId::numbered(5), "alice"),
                Player::new(PlayerId::numbered(4), "Zed"),
                Player::new(PlayerId::new("hub-9"), "  "),
                Player::new(PlayerId::new("hub-10"), " Bob "),
            ],
            MAX_NAME_LEN,
        );

        let names: Vec<_> = registry.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_from_players_resumes_id_counter() {
        let mut registry =
            PlayerRegistry::from_players(vec![Player::new(PlayerId::numbered(7), "Alice")], MAX_NAME_LEN);
        let next = registry.add_player("Bob").unwrap();
        assert_eq!(next.id, PlayerId::numbered(8));
    }

    #[test]
    fn test_id_counter_wraps_after_largest_id() {
        let mut registry = PlayerRegistry::from_players(
            vec![Player::new(PlayerId::numbered(u64::MAX - 1), "Alice")],
            MAX_NAME_LEN,
        );

        let bob = registry.add_player("Bob").unwrap();
        assert_eq!(bob.id, PlayerId::numbered(u64::MAX));

        let carol = registry.add_player("Carol").unwrap();
        assert_eq!(carol.id, PlayerId::numbered(1));
    }

    #[test]
    fn test_id_counter_skips_taken_ids_after_wrap() {
        let mut registry = PlayerRegistry::from_players(
            vec![
                Player::new(PlayerId::numbered(1), "Alice"),
                Player::new(PlayerId::numbered(u64::MAX), "Bob"),
            ],
            MAX_NAME_LEN,
        );

        let carol = registry.add_player("Carol").unwrap();
        assert_eq!(carol.id, PlayerId::numbered(2));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_config_name_limit_applies() {
        let config = SessionConfig::new().with_max_name_len(5);
        let mut registry = PlayerRegistry::from_config(&config);

        assert!(registry.add_player("Alice").is_ok());
        assert_eq!(
            registry.add_player("Bobby!"),
            Err(ValidationError::TooLong { max: 5, len: 6 })
        );

        let restored = PlayerRegistry::from_players(
            vec![
                Player::new(PlayerId::numbered(1), "Alice"),
                Player::new(PlayerId::numbered(2), "Roberta"),
            ],
            config.max_name_len,
        );
        assert_eq!(restored.len(), 1);
    }
}
