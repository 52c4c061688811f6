//! Character health operation errors.

use crate::infrastructure::ports::RepoError;
use healthcycle_domain::{CharacterId, DomainError};

/// Errors that can occur during character health operations.
///
/// A save that the store reports as having no effect is not an error; the
/// operations return `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum CharacterHealthError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Character data is corrupt for {id}: {message}")]
    CorruptCharacterData { id: CharacterId, message: String },

    /// The character's defenses contain a value the damage rules do not know.
    #[error("Invalid defense configuration: {0}")]
    InvalidDefenseConfiguration(DomainError),

    #[error("Storage error: {0}")]
    Storage(RepoError),
}

impl CharacterHealthError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CharacterNotFound(_))
    }
}
