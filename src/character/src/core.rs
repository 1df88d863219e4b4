// src/character/src/core.rs
use entity::Entity;
use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// Stat growth and thresholds
mod constants {
    pub const XP_THRESHOLD: u32 = 100; // Experience needed to level
    pub const LEVEL_HP_BONUS: u32 = 10; // Health gained per level on level-up
    pub const LEVEL_ATTACK_BONUS: u32 = 2; // Attack gained per level
    pub const LEVEL_DEFENSE_BONUS: u32 = 1; // Defense gained per level
    pub const MIN_DAMAGE: u32 = 1; // Minimum damage dealt through defense
}

/// A concrete combat-capable character: stat block plus leveling state.
///
/// Mutation happens only through the operations below; there is no revive,
/// so once hp reaches 0 the character stays down.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Character {
    name: String,
    hp: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
    level: u32,
    experience: u32,
    rng: GameRng,
}

impl Character {
    /// Create a character with a random dice seed
    pub fn new(name: impl Into<String>, health: u32, attack: u32, defense: u32) -> Self {
        Self::with_seed(name, health, attack, defense, rand::random())
    }

    /// Create a character with a fixed dice seed (reproducible rolls)
    pub fn with_seed(
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
        seed: u64,
    ) -> Self {
        Self {
            name: name.into(),
            hp: health,
            max_hp: health,
            attack,
            defense,
            level: 1,
            experience: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Get defense rating
    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Get current level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Get experience toward the next level
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Get the dice seed
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Mutable access to the character's own dice.
    ///
    /// Class layers roll on the same stream so a seeded character replays
    /// identically no matter which formulas consume the rolls.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Raise defense by a flat amount
    pub fn raise_defense(&mut self, amount: u32) {
        self.defense += amount;
    }

    /// Restore health, clamped to the maximum
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Gain experience; crossing the threshold levels up exactly once.
    ///
    /// Excess experience above the threshold is discarded, not carried
    /// forward.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience += amount;
        if self.experience >= constants::XP_THRESHOLD {
            self.level_up();
            self.experience = 0;
        }
    }

    /// Advance one level: +2 attack, +1 defense, and health set to
    /// `max_hp + level * 10` (a full restore plus a per-level bonus,
    /// not an increment).
    pub fn level_up(&mut self) {
        self.level += 1;
        self.hp = self.max_hp + self.level * constants::LEVEL_HP_BONUS;
        self.attack += constants::LEVEL_ATTACK_BONUS;
        self.defense += constants::LEVEL_DEFENSE_BONUS;
    }
}

impl Entity for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn attack(&self) -> u32 {
        self.attack
    }

    fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Half of defense (rounded down) mitigates incoming damage, but an
    /// attacker always deals at least `MIN_DAMAGE`.
    fn take_damage(&mut self, amount: u32) -> bool {
        let effective = amount
            .saturating_sub(self.defense / 2)
            .max(constants::MIN_DAMAGE);
        self.hp = self.hp.saturating_sub(effective);
        self.is_alive()
    }

    /// Base attack plus a uniform variance in [-2, 3], floored at 1
    fn attack_roll(&mut self) -> u32 {
        let variance = self.rng.variance(-2, 3);
        (self.attack as i32 + variance).max(1) as u32
    }
}
