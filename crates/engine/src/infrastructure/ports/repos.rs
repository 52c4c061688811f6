//! Repository port traits for database access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use healthcycle_domain::{CharacterId, PlayerCharacter};

use super::error::RepoError;

/// Result of persisting a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The store applied the write.
    Saved,
    /// The store accepted the call but reported zero affected records.
    NoChanges,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

// =============================================================================
// Player Characters
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerCharacterRepo: Send + Sync {
    /// Load a character. `Ok(None)` when no record has this id;
    /// `Err(RepoError::Serialization)` when the record cannot be decoded.
    async fn get(&self, id: &CharacterId) -> Result<Option<PlayerCharacter>, RepoError>;

    /// Insert or replace the whole character record, stamped with `updated_at`.
    async fn upsert(
        &self,
        pc: &PlayerCharacter,
        updated_at: DateTime<Utc>,
    ) -> Result<SaveOutcome, RepoError>;

    /// Number of stored character records.
    async fn count(&self) -> Result<u64, RepoError>;
}
