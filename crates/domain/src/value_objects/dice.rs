//! Hit dice sizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A polyhedral die size, as used for class hit dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl Die {
    /// Number of faces on the die.
    pub fn sides(&self) -> u8 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl TryFrom<u8> for Die {
    type Error = String;

    fn try_from(sides: u8) -> Result<Self, Self::Error> {
        match sides {
            4 => Ok(Die::D4),
            6 => Ok(Die::D6),
            8 => Ok(Die::D8),
            10 => Ok(Die::D10),
            12 => Ok(Die::D12),
            20 => Ok(Die::D20),
            other => Err(format!("Unsupported die size: d{other}")),
        }
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.sides()
    }
}
