// src/items/src/lib.rs

use serde::{Deserialize, Serialize};

/// Broad item categories a player can carry
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
    Weapon,
    Armor,
    Trinket,
}

/// An inventory item.
///
/// Items are inert references from the character model's point of view:
/// the player owns an ordered list of them, and removal matches by
/// equality. Item effects belong to whichever collaborator consumes them.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_matches_kind_and_name() {
        let a = Item::new(ItemKind::Potion, "Healing Potion");
        let b = Item::new(ItemKind::Potion, "Healing Potion");
        let c = Item::new(ItemKind::Trinket, "Healing Potion");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_uses_name() {
        let item = Item::new(ItemKind::Weapon, "Iron Sword")
            .with_description("A plain but serviceable blade");
        assert_eq!(item.to_string(), "Iron Sword");
    }
}
