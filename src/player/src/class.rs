// src/player/src/class.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use thiserror::Error;

/// A class name that doesn't match any playable class
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown class: {0}")]
pub struct ParseClassError(pub String);

/// Playable class tag
#[derive(
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum ClassKind {
    #[default]
    Warrior, // high health, heavy armor, melee strikes

    Mage,   // fragile, hits hard, burns mana
    Archer, // balanced stats, limited ammunition
}

impl ClassKind {
    /// Starting health for the class
    pub fn base_hp(&self) -> u32 {
        match self {
            ClassKind::Warrior => 150,
            ClassKind::Mage => 80,
            ClassKind::Archer => 110,
        }
    }

    /// Starting attack power for the class
    pub fn base_attack(&self) -> u32 {
        match self {
            ClassKind::Warrior => 18,
            ClassKind::Mage => 25,
            ClassKind::Archer => 20,
        }
    }

    /// Starting defense for the class
    pub fn base_defense(&self) -> u32 {
        match self {
            ClassKind::Warrior => 10,
            ClassKind::Mage => 3,
            ClassKind::Archer => 6,
        }
    }
}

impl std::fmt::Display for ClassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ClassKind::Warrior => "Warrior",
                ClassKind::Mage => "Mage",
                ClassKind::Archer => "Archer",
            }
        )
    }
}

impl FromStr for ClassKind {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "warrior" => Ok(ClassKind::Warrior),
            "mage" => Ok(ClassKind::Mage),
            "archer" => Ok(ClassKind::Archer),
            _ => Err(ParseClassError(s.to_string())),
        }
    }
}
