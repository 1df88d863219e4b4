// src/entity/src/lib.rs

/// Contract for anything that can stand in a fight.
///
/// Every combat-capable thing in the game (characters, playable classes,
/// whatever an external combat loop brings along) exposes the same minimal
/// surface: identity, a health pool, an attack stat, and the three
/// behaviors below. There is no shared implementation; each variant rolls
/// and bleeds in its own way.
pub trait Entity {
    /// Get the entity's name
    fn name(&self) -> &str;

    /// Get current health
    fn hp(&self) -> u32;

    /// Get maximum health
    fn max_hp(&self) -> u32;

    /// Get base attack power
    fn attack(&self) -> u32;

    /// Whether the entity is still standing
    fn is_alive(&self) -> bool;

    /// Apply pre-mitigation damage. Returns aliveness afterwards.
    fn take_damage(&mut self, amount: u32) -> bool;

    /// Roll a damage value for one attack.
    ///
    /// Takes `&mut self`: a roll may consume class resources (mana,
    /// ammunition) and always advances the entity's own RNG.
    fn attack_roll(&mut self) -> u32;
}
