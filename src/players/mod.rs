//! Player system: ids, name validation, roster.
//!
//! ## Key Types
//!
//! - `PlayerId`: Opaque string id, unique within a roster
//! - `Player`: Id plus display name
//! - `PlayerRegistry`: Ordered roster enforcing the name rules

pub mod player;
pub mod registry;
pub mod validation;

pub use player::{Player, PlayerId};
pub use registry::PlayerRegistry;
pub use validation::validate_player_name;
