//! Damage types, defenses, and the per-character defense table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

// ============================================================================
// DamageType
// ============================================================================

/// The category of an incoming damage effect.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DamageType {
    #[default]
    #[serde(alias = "none")]
    None,
    #[serde(alias = "bludgeoning")]
    Bludgeoning,
    #[serde(alias = "piercing")]
    Piercing,
    #[serde(alias = "slashing")]
    Slashing,
    #[serde(alias = "fire")]
    Fire,
    #[serde(alias = "cold")]
    Cold,
    #[serde(alias = "acid")]
    Acid,
    #[serde(alias = "thunder")]
    Thunder,
    #[serde(alias = "lightning")]
    Lightning,
    #[serde(alias = "poison")]
    Poison,
    #[serde(alias = "radiant")]
    Radiant,
    #[serde(alias = "necrotic")]
    Necrotic,
    #[serde(alias = "psychic")]
    Psychic,
    #[serde(alias = "force")]
    Force,
}

impl DamageType {
    pub const ALL: [DamageType; 14] = [
        DamageType::None,
        DamageType::Bludgeoning,
        DamageType::Piercing,
        DamageType::Slashing,
        DamageType::Fire,
        DamageType::Cold,
        DamageType::Acid,
        DamageType::Thunder,
        DamageType::Lightning,
        DamageType::Poison,
        DamageType::Radiant,
        DamageType::Necrotic,
        DamageType::Psychic,
        DamageType::Force,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::None => "None",
            DamageType::Bludgeoning => "Bludgeoning",
            DamageType::Piercing => "Piercing",
            DamageType::Slashing => "Slashing",
            DamageType::Fire => "Fire",
            DamageType::Cold => "Cold",
            DamageType::Acid => "Acid",
            DamageType::Thunder => "Thunder",
            DamageType::Lightning => "Lightning",
            DamageType::Poison => "Poison",
            DamageType::Radiant => "Radiant",
            DamageType::Necrotic => "Necrotic",
            DamageType::Psychic => "Psychic",
            DamageType::Force => "Force",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse of a damage type name ("fire", "Fire", "FIRE").
impl FromStr for DamageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DamageType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::parse(format!("Unknown damage type: {}", s)))
    }
}

// ============================================================================
// DefenseType
// ============================================================================

/// How a character responds to a damage type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseType {
    /// Full damage.
    #[default]
    #[serde(alias = "none")]
    None,
    /// Half damage, rounded up.
    #[serde(alias = "resistance")]
    Resistance,
    /// No damage.
    #[serde(alias = "immunity")]
    Immunity,
}

impl fmt::Display for DefenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefenseType::None => f.write_str("None"),
            DefenseType::Resistance => f.write_str("Resistance"),
            DefenseType::Immunity => f.write_str("Immunity"),
        }
    }
}

// ============================================================================
// DefenseMap
// ============================================================================

/// A single stored defense value.
///
/// Stored character data is not trusted to only contain known defenses.
/// Values outside [`DefenseType`] are kept verbatim so the record
/// round-trips unchanged, and are reported when the rules try to use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefenseEntry {
    Known(DefenseType),
    Unrecognized(String),
}

impl DefenseEntry {
    pub fn unrecognized(value: impl Into<String>) -> Self {
        Self::Unrecognized(value.into())
    }
}

impl From<DefenseType> for DefenseEntry {
    fn from(value: DefenseType) -> Self {
        Self::Known(value)
    }
}

/// Per-character table of defenses keyed by damage type.
///
/// Damage types without an entry have no defense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefenseMap(BTreeMap<DamageType, DefenseEntry>);

impl DefenseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, damage_type: DamageType, defense: impl Into<DefenseEntry>) -> Self {
        self.insert(damage_type, defense);
        self
    }

    pub fn insert(&mut self, damage_type: DamageType, defense: impl Into<DefenseEntry>) {
        self.0.insert(damage_type, defense.into());
    }

    pub fn get(&self, damage_type: DamageType) -> Option<&DefenseEntry> {
        self.0.get(&damage_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve the defense a character has against a damage type.
///
/// Total over every damage type: a missing entry is `DefenseType::None`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDefense` when the stored entry is not one of
/// the known defense types.
pub fn lookup_defense(
    defenses: &DefenseMap,
    damage_type: DamageType,
) -> Result<DefenseType, DomainError> {
    match defenses.get(damage_type) {
        None => Ok(DefenseType::None),
        Some(DefenseEntry::Known(defense)) => Ok(*defense),
        Some(DefenseEntry::Unrecognized(value)) => {
            Err(DomainError::invalid_defense(damage_type, value.clone()))
        }
    }
}
