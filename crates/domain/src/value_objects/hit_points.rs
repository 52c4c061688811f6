//! Hit points and the rules that change them.
//!
//! All operations here are pure: they take the current hit points and an
//! action and leave the value satisfying `0 <= current <= max` and
//! `temp >= 0`. Non-positive amounts are accepted and change nothing;
//! rejecting them is the job of whoever receives the request.

use serde::{Deserialize, Serialize};

use super::defense::{lookup_defense, DamageType, DefenseMap, DefenseType};
use crate::error::DomainError;

/// A character's current, maximum, and temporary hit points.
///
/// # Invariants
///
/// - `0 <= current <= max`
/// - `temp >= 0`
///
/// Non-lethal damage is stored with the hit points but no rule here reads or
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HitPointsData", into = "HitPointsData")]
pub struct HitPoints {
    current: i32,
    max: i32,
    temp: i32,
    non_lethal: i32,
}

/// Wire/storage shape, validated into [`HitPoints`] on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HitPointsData {
    current: i32,
    max: i32,
    #[serde(default)]
    temp: i32,
    #[serde(default, alias = "nonLeathal")]
    non_lethal: i32,
}

/// What a single damage application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReport {
    pub damage_type: DamageType,
    pub defense: DefenseType,
    /// Damage left after the defense was applied.
    pub effective: i32,
    pub absorbed_by_temp: i32,
    pub hp_lost: i32,
}

impl HitPoints {
    /// Full health with no temporary hit points.
    ///
    /// A negative `max` is treated as zero.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: max,
            max,
            temp: 0,
            non_lethal: 0,
        }
    }

    /// Reconstruct from stored values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the values break the invariants.
    pub fn from_parts(current: i32, max: i32, temp: i32) -> Result<Self, DomainError> {
        if max < 0 {
            return Err(DomainError::validation(format!(
                "Max hit points cannot be negative (got {max})"
            )));
        }
        if current < 0 || current > max {
            return Err(DomainError::validation(format!(
                "Current hit points must be between 0 and {max} (got {current})"
            )));
        }
        if temp < 0 {
            return Err(DomainError::validation(format!(
                "Temporary hit points cannot be negative (got {temp})"
            )));
        }
        Ok(Self {
            current,
            max,
            temp,
            non_lethal: 0,
        })
    }

    /// Same hit points carrying a stored non-lethal damage total.
    pub fn with_non_lethal(mut self, non_lethal: i32) -> Self {
        self.non_lethal = non_lethal;
        self
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn temp(&self) -> i32 {
        self.temp
    }

    pub fn non_lethal(&self) -> i32 {
        self.non_lethal
    }

    /// Hit points needed to reach max.
    pub fn missing(&self) -> i32 {
        self.max - self.current
    }

    /// Restore hit points, never above max. Temporary hit points are untouched.
    ///
    /// Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let applied = self.missing().min(amount.max(0));
        self.current += applied;
        applied
    }

    /// Grant temporary hit points.
    ///
    /// Temporary hit points never stack: the larger of the existing and the
    /// incoming pool is kept.
    pub fn grant_temp(&mut self, amount: i32) {
        self.temp = self.temp.max(amount);
    }

    /// Apply damage of a type after the character's defenses.
    ///
    /// Temporary hit points absorb damage first; whatever exceeds the
    /// remaining hit points is discarded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDefense` if the defense configured for
    /// `damage_type` is not a known defense. Hit points are unchanged.
    pub fn apply_damage(
        &mut self,
        defenses: &DefenseMap,
        damage_type: DamageType,
        amount: i32,
    ) -> Result<DamageReport, DomainError> {
        let defense = lookup_defense(defenses, damage_type)?;
        let effective = effective_damage(defense, amount);

        let absorbed_by_temp = effective.min(self.temp);
        self.temp -= absorbed_by_temp;
        let remaining = (effective - absorbed_by_temp).max(0);

        let hp_lost = remaining.min(self.current);
        self.current -= hp_lost;

        Ok(DamageReport {
            damage_type,
            defense,
            effective,
            absorbed_by_temp,
            hp_lost,
        })
    }
}

/// Damage that gets through a defense.
///
/// Resistance halves damage rounding up (5 becomes 3). Non-positive
/// amounts deal nothing.
pub fn effective_damage(defense: DefenseType, amount: i32) -> i32 {
    let amount = amount.max(0);
    match defense {
        DefenseType::Immunity => 0,
        DefenseType::Resistance => amount / 2 + amount % 2,
        DefenseType::None => amount,
    }
}

impl TryFrom<HitPointsData> for HitPoints {
    type Error = DomainError;

    fn try_from(data: HitPointsData) -> Result<Self, Self::Error> {
        let hp = Self::from_parts(data.current, data.max, data.temp)?;
        Ok(hp.with_non_lethal(data.non_lethal))
    }
}

impl From<HitPoints> for HitPointsData {
    fn from(hp: HitPoints) -> Self {
        Self {
            current: hp.current,
            max: hp.max,
            temp: hp.temp,
            non_lethal: hp.non_lethal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DefenseEntry;

    fn hp(current: i32, max: i32, temp: i32) -> HitPoints {
        HitPoints::from_parts(current, max, temp).unwrap()
    }

    fn no_defenses() -> DefenseMap {
        DefenseMap::new()
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    #[test]
    fn new_starts_at_full_health() {
        let hit_points = HitPoints::new(25);
        assert_eq!(hit_points, hp(25, 25, 0));
    }

    #[test]
    fn from_parts_rejects_broken_invariants() {
        assert!(HitPoints::from_parts(51, 50, 0).is_err());
        assert!(HitPoints::from_parts(-1, 50, 0).is_err());
        assert!(HitPoints::from_parts(10, 50, -3).is_err());
        assert!(HitPoints::from_parts(0, -1, 0).is_err());
        assert!(HitPoints::from_parts(0, 0, 0).is_ok());
    }

    #[test]
    fn deserialize_validates_invariants() {
        let ok: HitPoints =
            serde_json::from_str(r#"{"current":25,"max":50,"temp":3}"#).unwrap();
        assert_eq!(ok, hp(25, 50, 3));

        let missing_temp: HitPoints = serde_json::from_str(r#"{"current":25,"max":50}"#).unwrap();
        assert_eq!(missing_temp.temp(), 0);

        let broken: Result<HitPoints, _> =
            serde_json::from_str(r#"{"current":60,"max":50,"temp":0}"#);
        assert!(broken.is_err());
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(hp(25, 50, 5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"current": 25, "max": 50, "temp": 5, "nonLethal": 0})
        );
    }

    #[test]
    fn non_lethal_is_carried_through_rules_and_storage() {
        let mut hit_points: HitPoints =
            serde_json::from_str(r#"{"current":25,"max":50,"temp":5,"nonLeathal":4}"#).unwrap();
        assert_eq!(hit_points.non_lethal(), 4);

        hit_points.heal(10);
        hit_points.grant_temp(8);
        hit_points
            .apply_damage(&no_defenses(), DamageType::Fire, 12)
            .unwrap();
        assert_eq!(hit_points.non_lethal(), 4);

        let json = serde_json::to_value(hit_points).unwrap();
        assert_eq!(json["nonLethal"], 4);
    }

    // ------------------------------------------------------------------
    // Heal
    // ------------------------------------------------------------------

    #[test]
    fn heal_adds_missing_hit_points() {
        let mut hit_points = hp(25, 50, 0);
        assert_eq!(hit_points.heal(5), 5);
        assert_eq!(hit_points.current(), 30);
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut hit_points = hp(45, 50, 7);
        assert_eq!(hit_points.heal(100), 5);
        assert_eq!(hit_points, hp(50, 50, 7));
    }

    #[test]
    fn heal_is_clamped_for_all_inputs() {
        for current in 0..=20 {
            for amount in 0..=30 {
                let mut hit_points = hp(current, 20, 4);
                hit_points.heal(amount);
                assert_eq!(hit_points.current(), (current + amount).min(20));
                assert_eq!(hit_points.temp(), 4);
                assert_eq!(hit_points.max(), 20);
            }
        }
    }

    #[test]
    fn non_positive_heal_is_a_no_op() {
        let mut hit_points = hp(25, 50, 0);
        assert_eq!(hit_points.heal(0), 0);
        assert_eq!(hit_points.heal(-10), 0);
        assert_eq!(hit_points, hp(25, 50, 0));
    }

    // ------------------------------------------------------------------
    // Temporary hit points
    // ------------------------------------------------------------------

    #[test]
    fn grant_temp_keeps_existing_when_larger() {
        let mut hit_points = hp(25, 50, 10);
        hit_points.grant_temp(5);
        assert_eq!(hit_points.temp(), 10);
    }

    #[test]
    fn grant_temp_replaces_when_larger() {
        let mut hit_points = hp(25, 50, 5);
        hit_points.grant_temp(10);
        assert_eq!(hit_points.temp(), 10);
        assert_eq!(hit_points.current(), 25);
    }

    #[test]
    fn grant_temp_does_not_stack() {
        let mut hit_points = hp(25, 50, 0);
        hit_points.grant_temp(8);
        hit_points.grant_temp(8);
        assert_eq!(hit_points.temp(), 8);
    }

    #[test]
    fn negative_grant_temp_is_a_no_op() {
        let mut hit_points = hp(25, 50, 0);
        hit_points.grant_temp(-4);
        assert_eq!(hit_points, hp(25, 50, 0));
    }

    // ------------------------------------------------------------------
    // Damage
    // ------------------------------------------------------------------

    #[test]
    fn temp_absorbs_small_hits_completely() {
        let mut hit_points = hp(25, 50, 10);
        let report = hit_points
            .apply_damage(&no_defenses(), DamageType::Slashing, 5)
            .unwrap();
        assert_eq!(hit_points, hp(25, 50, 5));
        assert_eq!(report.absorbed_by_temp, 5);
        assert_eq!(report.hp_lost, 0);
    }

    #[test]
    fn damage_past_temp_reaches_current() {
        let mut hit_points = hp(25, 50, 10);
        let report = hit_points
            .apply_damage(&no_defenses(), DamageType::Slashing, 20)
            .unwrap();
        assert_eq!(hit_points, hp(15, 50, 0));
        assert_eq!(report.absorbed_by_temp, 10);
        assert_eq!(report.hp_lost, 10);
    }

    #[test]
    fn lethal_damage_stops_at_zero() {
        let mut hit_points = hp(25, 50, 0);
        let report = hit_points
            .apply_damage(&no_defenses(), DamageType::Force, 500)
            .unwrap();
        assert_eq!(hit_points, hp(0, 50, 0));
        assert_eq!(report.hp_lost, 25);
    }

    #[test]
    fn immunity_leaves_state_unchanged() {
        let defenses = DefenseMap::new().with(DamageType::Fire, DefenseType::Immunity);
        let original = hp(25, 50, 10);
        let mut hit_points = original;
        for _ in 0..3 {
            let report = hit_points
                .apply_damage(&defenses, DamageType::Fire, 40)
                .unwrap();
            assert_eq!(report.effective, 0);
            assert_eq!(hit_points, original);
        }
    }

    #[test]
    fn resistance_halves_rounding_up() {
        assert_eq!(effective_damage(DefenseType::Resistance, 10), 5);
        assert_eq!(effective_damage(DefenseType::Resistance, 5), 3);
        assert_eq!(effective_damage(DefenseType::Resistance, 1), 1);
        assert_eq!(effective_damage(DefenseType::Resistance, 0), 0);
        assert_eq!(effective_damage(DefenseType::Resistance, i32::MAX), 1 << 30);
    }

    #[test]
    fn resisted_damage_is_applied_after_halving() {
        let defenses = DefenseMap::new().with(DamageType::Slashing, DefenseType::Resistance);
        let mut hit_points = hp(25, 50, 0);
        let report = hit_points
            .apply_damage(&defenses, DamageType::Slashing, 5)
            .unwrap();
        assert_eq!(report.defense, DefenseType::Resistance);
        assert_eq!(report.effective, 3);
        assert_eq!(hit_points.current(), 22);
    }

    #[test]
    fn missing_entry_matches_explicit_none() {
        let explicit = DefenseMap::new().with(DamageType::Cold, DefenseType::None);
        let mut with_entry = hp(30, 40, 4);
        let mut without_entry = hp(30, 40, 4);

        with_entry
            .apply_damage(&explicit, DamageType::Cold, 12)
            .unwrap();
        without_entry
            .apply_damage(&no_defenses(), DamageType::Cold, 12)
            .unwrap();

        assert_eq!(with_entry, without_entry);
        assert_eq!(with_entry, hp(22, 40, 0));
    }

    #[test]
    fn unrecognized_defense_fails_without_changing_state() {
        let defenses =
            DefenseMap::new().with(DamageType::Poison, DefenseEntry::unrecognized("Absorb"));
        let original = hp(25, 50, 10);
        let mut hit_points = original;

        let err = hit_points
            .apply_damage(&defenses, DamageType::Poison, 10)
            .unwrap_err();

        assert!(err.is_invalid_defense());
        assert_eq!(hit_points, original);
    }

    #[test]
    fn unrecognized_defense_on_other_type_is_not_consulted() {
        let defenses =
            DefenseMap::new().with(DamageType::Poison, DefenseEntry::unrecognized("Absorb"));
        let mut hit_points = hp(25, 50, 0);
        hit_points
            .apply_damage(&defenses, DamageType::Fire, 10)
            .unwrap();
        assert_eq!(hit_points.current(), 15);
    }

    #[test]
    fn non_positive_damage_is_a_no_op() {
        let mut hit_points = hp(25, 50, 5);
        hit_points
            .apply_damage(&no_defenses(), DamageType::None, -10)
            .unwrap();
        hit_points
            .apply_damage(&no_defenses(), DamageType::None, 0)
            .unwrap();
        assert_eq!(hit_points, hp(25, 50, 5));
    }

    #[test]
    fn heal_then_resisted_fire() {
        let defenses = DefenseMap::new().with(DamageType::Fire, DefenseType::Resistance);
        let mut hit_points = hp(25, 50, 0);

        hit_points.heal(5);
        assert_eq!(hit_points.current(), 30);

        hit_points.heal(100);
        assert_eq!(hit_points.current(), 50);

        let report = hit_points
            .apply_damage(&defenses, DamageType::Fire, 10)
            .unwrap();
        assert_eq!(report.effective, 5);
        assert_eq!(hit_points, hp(45, 50, 0));
    }
}
