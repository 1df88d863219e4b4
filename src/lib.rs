//! Emberfall character core: the entity contract, the character stat
//! block, and the playable classes. Combat sequencing lives with whatever
//! collaborator drives these types; nothing here loops or renders.

pub use character::{Character, GameRng};
pub use entity::Entity;
pub use items::{Item, ItemKind};
pub use player::{ClassKind, ParseClassError, Player};
