//! Ability scores and class levels carried on the character sheet.

use serde::{Deserialize, Serialize};

use super::dice::Die;
use super::names::ClassName;

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

/// Levels taken in one class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    pub name: ClassName,
    pub hit_dice_value: Die,
    pub class_level: u8,
}

impl ClassLevel {
    pub fn new(name: ClassName, hit_dice_value: Die, class_level: u8) -> Self {
        Self {
            name,
            hit_dice_value,
            class_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_level_uses_camel_case() {
        let class = ClassLevel::new(ClassName::new("fighter").unwrap(), Die::D10, 5);
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "fighter", "hitDiceValue": 10, "classLevel": 5})
        );
    }
}
