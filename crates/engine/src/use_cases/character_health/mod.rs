//! Character health use cases.
//!
//! Every mutation is one load → rules → save cycle:
//! - at most one fetch and one persist per call
//! - the whole character is persisted, stamped once from the clock
//! - no retries; a save without effect is reported as `Ok(None)`

mod error;

pub use error::CharacterHealthError;

use std::sync::Arc;

use healthcycle_domain::{CharacterId, DamageType, HitPoints, PlayerCharacter};

use crate::infrastructure::ports::{ClockPort, PlayerCharacterRepo, RepoError};

/// Container for character health use cases.
pub struct CharacterHealthUseCases {
    repo: Arc<dyn PlayerCharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CharacterHealthUseCases {
    pub fn new(repo: Arc<dyn PlayerCharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Load the full character sheet.
    pub async fn get_character(
        &self,
        id: &CharacterId,
    ) -> Result<PlayerCharacter, CharacterHealthError> {
        self.load("get_character", id).await
    }

    /// Heal a character, never above max hit points.
    ///
    /// Returns the updated hit points, or `None` if the save had no effect.
    pub async fn heal(
        &self,
        id: &CharacterId,
        amount: i32,
    ) -> Result<Option<HitPoints>, CharacterHealthError> {
        let mut pc = self.load("heal", id).await?;

        let healed = pc.heal(amount);
        tracing::info!(
            character_id = %id,
            healed,
            current = pc.hit_points().current(),
            "Healed character"
        );

        self.persist("heal", pc).await
    }

    /// Grant temporary hit points; the larger of the old and new pool is kept.
    ///
    /// Returns the updated hit points, or `None` if the save had no effect.
    pub async fn grant_temp_hp(
        &self,
        id: &CharacterId,
        amount: i32,
    ) -> Result<Option<HitPoints>, CharacterHealthError> {
        let mut pc = self.load("grant_temp_hp", id).await?;

        pc.grant_temp_hp(amount);
        tracing::info!(
            character_id = %id,
            temp = pc.hit_points().temp(),
            "Set character temporary hit points"
        );

        self.persist("grant_temp_hp", pc).await
    }

    /// Apply typed damage after the character's defenses.
    ///
    /// Returns the updated hit points, or `None` if the save had no effect.
    /// A broken defense entry fails the call and nothing is persisted.
    pub async fn apply_damage(
        &self,
        id: &CharacterId,
        damage_type: DamageType,
        amount: i32,
    ) -> Result<Option<HitPoints>, CharacterHealthError> {
        let mut pc = self.load("apply_damage", id).await?;

        let report = pc.take_damage(damage_type, amount).map_err(|e| {
            tracing::error!(
                character_id = %id,
                damage_type = %damage_type,
                error = %e,
                "Character has an invalid defense configuration"
            );
            CharacterHealthError::InvalidDefenseConfiguration(e)
        })?;

        tracing::info!(
            character_id = %id,
            damage_type = %report.damage_type,
            defense = %report.defense,
            amount,
            effective = report.effective,
            absorbed_by_temp = report.absorbed_by_temp,
            hp_lost = report.hp_lost,
            "Applied damage to character"
        );

        self.persist("apply_damage", pc).await
    }

    async fn load(
        &self,
        operation: &'static str,
        id: &CharacterId,
    ) -> Result<PlayerCharacter, CharacterHealthError> {
        match self.repo.get(id).await {
            Ok(Some(pc)) => Ok(pc),
            Ok(None) => {
                tracing::debug!(operation, character_id = %id, "Character not found");
                Err(CharacterHealthError::CharacterNotFound(id.clone()))
            }
            Err(RepoError::Serialization(message)) => {
                tracing::error!(
                    operation,
                    character_id = %id,
                    error = %message,
                    "Character data is corrupt"
                );
                Err(CharacterHealthError::CorruptCharacterData {
                    id: id.clone(),
                    message,
                })
            }
            Err(e) => {
                tracing::error!(
                    operation,
                    character_id = %id,
                    error = %e,
                    "Failed to load character"
                );
                Err(CharacterHealthError::Storage(e))
            }
        }
    }

    async fn persist(
        &self,
        operation: &'static str,
        pc: PlayerCharacter,
    ) -> Result<Option<HitPoints>, CharacterHealthError> {
        let updated_at = self.clock.now();

        match self.repo.upsert(&pc, updated_at).await {
            Ok(outcome) if outcome.is_saved() => Ok(Some(*pc.hit_points())),
            Ok(_) => {
                tracing::warn!(
                    operation,
                    character_id = %pc.id(),
                    "Character save reported no changes"
                );
                Ok(None)
            }
            Err(e) => {
                tracing::error!(
                    operation,
                    character_id = %pc.id(),
                    error = %e,
                    "Failed to save character"
                );
                Err(CharacterHealthError::Storage(e))
            }
        }
    }
}
