// src/player/src/core.rs

use character::Character;
use entity::Entity;
use items::Item;
use serde::{Deserialize, Serialize};

use crate::class::ClassKind;

/// Class tuning constants
mod constants {
    pub const WARRIOR_CRIT_CHANCE: f64 = 0.15; // Chance of a critical strike
    pub const WARRIOR_CRIT_MULTIPLIER: f32 = 1.5; // Critical damage multiplier
    pub const SHIELD_BASH_DEFENSE: u32 = 3; // Defense gained per Shield Bash

    pub const STARTING_MANA: u32 = 50; // Mage opening pool (also the cap)
    pub const BOLT_MANA_COST: u32 = 10; // Mana burned per arcane bolt
    pub const FIREBALL_MANA_COST: u32 = 30; // Mana burned by Fireball

    pub const STARTING_ARROWS: u32 = 30; // Arrows in a fresh quiver
    pub const ARROW_CAP: u32 = 100; // Quiver ceiling when replenishing
    pub const ARCHER_CRIT_CHANCE: f64 = 0.25; // Chance of a precise shot
    pub const ARCHER_CRIT_MULTIPLIER: f32 = 1.75; // Precise shot multiplier
    pub const VOLLEY_ARROW_COST: u32 = 5; // Arrows spent by Rain of Arrows
}

/// Class identity plus its per-class resource payload.
///
/// Warriors carry no expendable resource; running a pool dry never blocks
/// the basic attack, it only degrades it to the class's fallback roll.
#[derive(Clone, Debug, Serialize, Deserialize)]
enum ClassState {
    Warrior,
    Mage { mana: u32, max_mana: u32 },
    Archer { arrows: u32 },
}

impl ClassState {
    fn new(class: ClassKind) -> Self {
        match class {
            ClassKind::Warrior => ClassState::Warrior,
            ClassKind::Mage => ClassState::Mage {
                mana: constants::STARTING_MANA,
                max_mana: constants::STARTING_MANA,
            },
            ClassKind::Archer => ClassState::Archer {
                arrows: constants::STARTING_ARROWS,
            },
        }
    }

    fn kind(&self) -> ClassKind {
        match self {
            ClassState::Warrior => ClassKind::Warrior,
            ClassState::Mage { .. } => ClassKind::Mage,
            ClassState::Archer { .. } => ClassKind::Archer,
        }
    }
}

/// A playable character: a stat block plus class state, inventory and gold.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    character: Character,
    state: ClassState,
    inventory: Vec<Item>,
    gold: u32,
}

impl Player {
    /// Create a player of the given class with a random dice seed
    pub fn new(class: ClassKind, name: impl Into<String>) -> Self {
        Self::assemble(
            class,
            Character::new(
                name,
                class.base_hp(),
                class.base_attack(),
                class.base_defense(),
            ),
        )
    }

    /// Create a player with a fixed dice seed (reproducible rolls)
    pub fn with_seed(class: ClassKind, name: impl Into<String>, seed: u64) -> Self {
        Self::assemble(
            class,
            Character::with_seed(
                name,
                class.base_hp(),
                class.base_attack(),
                class.base_defense(),
                seed,
            ),
        )
    }

    fn assemble(class: ClassKind, character: Character) -> Self {
        Self {
            character,
            state: ClassState::new(class),
            inventory: Vec::new(),
            gold: 0,
        }
    }

    /// Get the player's class
    pub fn class(&self) -> ClassKind {
        self.state.kind()
    }

    /// Get defense rating
    pub fn defense(&self) -> u32 {
        self.character.defense()
    }

    /// Get current level
    pub fn level(&self) -> u32 {
        self.character.level()
    }

    /// Get experience toward the next level
    pub fn experience(&self) -> u32 {
        self.character.experience()
    }

    /// Restore health, clamped to the maximum
    pub fn heal(&mut self, amount: u32) {
        self.character.heal(amount);
    }

    /// Gain experience, leveling up on the threshold
    pub fn gain_experience(&mut self, amount: u32) {
        self.character.gain_experience(amount);
    }

    /// Current mana, if the class has a mana pool
    pub fn mana(&self) -> Option<u32> {
        match &self.state {
            ClassState::Mage { mana, .. } => Some(*mana),
            _ => None,
        }
    }

    /// Mana ceiling, if the class has a mana pool
    pub fn max_mana(&self) -> Option<u32> {
        match &self.state {
            ClassState::Mage { max_mana, .. } => Some(*max_mana),
            _ => None,
        }
    }

    /// Remaining arrows, if the class carries a quiver
    pub fn arrows(&self) -> Option<u32> {
        match &self.state {
            ClassState::Archer { arrows } => Some(*arrows),
            _ => None,
        }
    }

    /// Restore mana up to the pool's maximum. No-op for manaless classes.
    pub fn restore_mana(&mut self, amount: u32) {
        if let ClassState::Mage { mana, max_mana } = &mut self.state {
            *mana = (*mana + amount).min(*max_mana);
        }
    }

    /// Add arrows up to the quiver cap. No-op for classes without one.
    pub fn replenish_arrows(&mut self, amount: u32) {
        if let ClassState::Archer { arrows } = &mut self.state {
            *arrows = (*arrows + amount).min(constants::ARROW_CAP);
        }
    }

    /// Fire the class's special ability, returning the combat log message.
    ///
    /// Insufficient resources fail softly: the message says so and nothing
    /// is mutated.
    pub fn special_ability(&mut self) -> String {
        match &mut self.state {
            ClassState::Warrior => {
                self.character
                    .raise_defense(constants::SHIELD_BASH_DEFENSE);
                "Shield Bash activated! Defense +3".to_string()
            }
            ClassState::Mage { mana, .. } => {
                if *mana >= constants::FIREBALL_MANA_COST {
                    *mana -= constants::FIREBALL_MANA_COST;
                    "Fireball cast! Massive damage incoming!".to_string()
                } else {
                    "Not enough mana for Fireball!".to_string()
                }
            }
            ClassState::Archer { arrows } => {
                if *arrows >= constants::VOLLEY_ARROW_COST {
                    *arrows -= constants::VOLLEY_ARROW_COST;
                    "Rain of Arrows cast! Multiple hits incoming!".to_string()
                } else {
                    "Not enough arrows for Rain of Arrows!".to_string()
                }
            }
        }
    }

    /// Add an item to the inventory
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Remove the first item equal to the given one.
    ///
    /// Returns the removed item, or `None` (and no mutation) if absent.
    pub fn remove_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.inventory.iter().position(|held| held == item)?;
        Some(self.inventory.remove(index))
    }

    /// Get the carried items, in pickup order
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Add gold. The purse only ever grows.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Get gold on hand
    pub fn gold(&self) -> u32 {
        self.gold
    }
}

impl Entity for Player {
    fn name(&self) -> &str {
        self.character.name()
    }

    fn hp(&self) -> u32 {
        self.character.hp()
    }

    fn max_hp(&self) -> u32 {
        self.character.max_hp()
    }

    fn attack(&self) -> u32 {
        self.character.attack()
    }

    fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.character.take_damage(amount)
    }

    /// Class-specific damage roll. Rolls that need a resource consume it
    /// up front; an empty pool downgrades the roll instead of failing.
    fn attack_roll(&mut self) -> u32 {
        let attack = self.character.attack();
        match &mut self.state {
            ClassState::Warrior => {
                let rng = self.character.rng_mut();
                let variance = rng.variance(-1, 4);
                let critical = rng.random_bool(constants::WARRIOR_CRIT_CHANCE);
                let base = attack as i32 + variance;
                let damage = if critical {
                    (base as f32 * constants::WARRIOR_CRIT_MULTIPLIER) as i32
                } else {
                    base
                };
                damage.max(1) as u32
            }
            ClassState::Mage { mana, .. } => {
                if *mana >= constants::BOLT_MANA_COST {
                    *mana -= constants::BOLT_MANA_COST;
                    let variance = self.character.rng_mut().variance(0, 5);
                    (attack as i32 + variance).max(1) as u32
                } else {
                    // dry pool: a feeble swing unrelated to the attack stat
                    self.character.rng_mut().random_range(3u32..=8)
                }
            }
            ClassState::Archer { arrows } => {
                if *arrows > 0 {
                    *arrows -= 1;
                    let rng = self.character.rng_mut();
                    if rng.random_bool(constants::ARCHER_CRIT_CHANCE) {
                        (attack as f32 * constants::ARCHER_CRIT_MULTIPLIER) as u32
                    } else {
                        let variance = rng.variance(-2, 2);
                        (attack as i32 + variance).max(1) as u32
                    }
                } else {
                    // empty quiver: a weak punch
                    self.character.rng_mut().random_range(2u32..=5)
                }
            }
        }
    }
}
