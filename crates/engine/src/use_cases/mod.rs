//! Use cases - User story orchestration.
//!
//! Use cases load aggregates through ports, apply domain rules and persist
//! the result.

pub mod character_health;

pub use character_health::{CharacterHealthError, CharacterHealthUseCases};
