//! Value objects - Immutable objects defined by their attributes

mod abilities;
mod defense;
mod dice;
mod hit_points;
mod names;

pub use abilities::{AbilityScores, ClassLevel};
pub use defense::{lookup_defense, DamageType, DefenseEntry, DefenseMap, DefenseType};
pub use dice::Die;
pub use hit_points::{effective_damage, DamageReport, HitPoints};
pub use names::{CharacterName, ClassName};
