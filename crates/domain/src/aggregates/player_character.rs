//! PlayerCharacter aggregate - the character sheet the health rules act on
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterId` and `HitPoints` are valid by construction; a stored
//!   `CharacterName` is carried through as written
//! - **Builder pattern**: Fluent API for optional fields
//!
//! Only the hit points are ever changed by the health rules. Every other
//! field is carried through load and save untouched.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::{
    AbilityScores, CharacterName, ClassLevel, DamageReport, DamageType, DefenseEntry, DefenseMap,
    HitPoints,
};

/// A player character sheet.
///
/// # Example
///
/// ```
/// use healthcycle_domain::{AbilityScores, CharacterId, CharacterName, PlayerCharacter};
///
/// let pc = PlayerCharacter::new(
///     CharacterId::new("briv").unwrap(),
///     CharacterName::new("Briv").unwrap(),
///     25,
///     AbilityScores::default(),
/// );
///
/// assert_eq!(pc.level(), 1);
/// assert_eq!(pc.hit_points().current(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCharacter {
    id: CharacterId,
    #[serde(default)]
    name: CharacterName,
    #[serde(default = "default_level")]
    level: u8,
    hit_points: HitPoints,
    #[serde(default)]
    classes: Vec<ClassLevel>,
    stats: AbilityScores,
    #[serde(default)]
    defenses: DefenseMap,
}

fn default_level() -> u8 {
    1
}

impl PlayerCharacter {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a level 1 character at full health with no classes or defenses.
    pub fn new(id: CharacterId, name: CharacterName, max_hp: i32, stats: AbilityScores) -> Self {
        Self {
            id,
            name,
            level: default_level(),
            hit_points: HitPoints::new(max_hp),
            classes: Vec::new(),
            stats,
            defenses: DefenseMap::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_hit_points(mut self, hit_points: HitPoints) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_class(mut self, class: ClassLevel) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_defense(
        mut self,
        damage_type: DamageType,
        defense: impl Into<DefenseEntry>,
    ) -> Self {
        self.defenses.insert(damage_type, defense);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn hit_points(&self) -> &HitPoints {
        &self.hit_points
    }

    pub fn classes(&self) -> &[ClassLevel] {
        &self.classes
    }

    pub fn stats(&self) -> &AbilityScores {
        &self.stats
    }

    pub fn defenses(&self) -> &DefenseMap {
        &self.defenses
    }

    // =========================================================================
    // Health rules
    // =========================================================================

    /// Heal the character. Returns the hit points actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.hit_points.heal(amount)
    }

    /// Grant temporary hit points (larger pool wins).
    pub fn grant_temp_hp(&mut self, amount: i32) {
        self.hit_points.grant_temp(amount);
    }

    /// Apply typed damage against this character's own defenses.
    pub fn take_damage(
        &mut self,
        damage_type: DamageType,
        amount: i32,
    ) -> Result<DamageReport, DomainError> {
        self.hit_points
            .apply_damage(&self.defenses, damage_type, amount)
    }
}
