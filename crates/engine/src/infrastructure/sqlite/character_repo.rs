//! SQLite-backed player character storage.
//!
//! Each character is one row holding the whole sheet as a JSON blob. Nothing
//! inside the sheet is queried, so a single table keeps the schema trivial.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use healthcycle_domain::{CharacterId, PlayerCharacter};
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{PlayerCharacterRepo, RepoError, SaveOutcome};

/// SQLite implementation of [`PlayerCharacterRepo`].
pub struct SqlitePlayerCharacterRepo {
    pool: SqlitePool,
}

impl SqlitePlayerCharacterRepo {
    /// Open (creating if needed) the database file and ensure the schema exists.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS player_characters (
                id TEXT PRIMARY KEY NOT NULL,
                character_data TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("ensure_schema", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PlayerCharacterRepo for SqlitePlayerCharacterRepo {
    async fn get(&self, id: &CharacterId) -> Result<Option<PlayerCharacter>, RepoError> {
        let row = sqlx::query("SELECT character_data FROM player_characters WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_character", e))?;

        match row {
            Some(row) => {
                let json: String = row
                    .try_get("character_data")
                    .map_err(|e| RepoError::database("get_character", e))?;
                let pc: PlayerCharacter = serde_json::from_str(&json).map_err(|e| {
                    tracing::error!(
                        character_id = %id,
                        error = %e,
                        "Stored character data could not be decoded"
                    );
                    RepoError::serialization(e)
                })?;
                if pc.id() != id {
                    tracing::error!(
                        character_id = %id,
                        stored_id = %pc.id(),
                        "Stored character data belongs to a different id"
                    );
                    return Err(RepoError::serialization(format!(
                        "record {id} holds data for {}",
                        pc.id()
                    )));
                }
                Ok(Some(pc))
            }
            None => Ok(None),
        }
    }

    async fn upsert(
        &self,
        pc: &PlayerCharacter,
        updated_at: DateTime<Utc>,
    ) -> Result<SaveOutcome, RepoError> {
        let json = serde_json::to_string(pc).map_err(RepoError::serialization)?;

        let result = sqlx::query(
            r#"
            INSERT INTO player_characters (id, character_data, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                character_data = excluded.character_data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(pc.id().as_str())
        .bind(json)
        .bind(updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(character_id = %pc.id(), error = %e, "Failed to upsert character");
            RepoError::database("upsert_character", e)
        })?;

        if result.rows_affected() > 0 {
            Ok(SaveOutcome::Saved)
        } else {
            Ok(SaveOutcome::NoChanges)
        }
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM player_characters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("count_characters", e))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
