//! HealthCycle domain.
//!
//! Character sheet types and the hit point rules. Nothing in this crate
//! performs I/O; persistence and transport live in `healthcycle-engine`.

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::PlayerCharacter;
pub use error::DomainError;
pub use ids::CharacterId;
pub use value_objects::{
    effective_damage, lookup_defense, AbilityScores, CharacterName, ClassLevel, ClassName,
    DamageReport, DamageType, DefenseEntry, DefenseMap, DefenseType, Die, HitPoints,
};
