//! Development seeding of the character store.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use healthcycle_domain::PlayerCharacter;

use crate::infrastructure::ports::{ClockPort, PlayerCharacterRepo};

/// Insert the character described by `path` when the store is empty.
///
/// Returns `true` if a character was inserted. A store that already holds
/// any record is left alone.
pub async fn seed_if_empty(
    repo: &Arc<dyn PlayerCharacterRepo>,
    clock: &Arc<dyn ClockPort>,
    path: &Path,
) -> anyhow::Result<bool> {
    if repo.count().await? > 0 {
        tracing::debug!("Character store already populated, skipping seed");
        return Ok(false);
    }

    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let pc: PlayerCharacter = serde_json::from_str(&json)
        .with_context(|| format!("parsing seed file {}", path.display()))?;

    let outcome = repo.upsert(&pc, clock.now()).await?;
    anyhow::ensure!(
        outcome.is_saved(),
        "seed character {} was not persisted",
        pc.id()
    );

    tracing::info!(character_id = %pc.id(), name = %pc.name(), "Seeded character store");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockPlayerCharacterRepo, SaveOutcome};
    use chrono::{TimeZone, Utc};

    fn seed_file() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("seed")
            .join("briv.json")
    }

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn seeds_empty_store() {
        let mut repo = MockPlayerCharacterRepo::new();
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_upsert()
            .withf(|pc, _| pc.id().as_str() == "briv" && pc.hit_points().max() == 25)
            .times(1)
            .returning(|_, _| Ok(SaveOutcome::Saved));
        let repo: Arc<dyn PlayerCharacterRepo> = Arc::new(repo);

        let seeded = seed_if_empty(&repo, &clock(), &seed_file()).await.unwrap();
        assert!(seeded);
    }

    #[tokio::test]
    async fn skips_populated_store() {
        let mut repo = MockPlayerCharacterRepo::new();
        repo.expect_count().times(1).returning(|| Ok(3));
        repo.expect_upsert().never();
        let repo: Arc<dyn PlayerCharacterRepo> = Arc::new(repo);

        let seeded = seed_if_empty(&repo, &clock(), &seed_file()).await.unwrap();
        assert!(!seeded);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let mut repo = MockPlayerCharacterRepo::new();
        repo.expect_count().returning(|| Ok(0));
        let repo: Arc<dyn PlayerCharacterRepo> = Arc::new(repo);

        let result = seed_if_empty(&repo, &clock(), Path::new("/nonexistent/seed.json")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unsaved_seed_is_an_error() {
        let mut repo = MockPlayerCharacterRepo::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_upsert()
            .returning(|_, _| Ok(SaveOutcome::NoChanges));
        let repo: Arc<dyn PlayerCharacterRepo> = Arc::new(repo);

        let result = seed_if_empty(&repo, &clock(), &seed_file()).await;
        assert!(result.is_err());
    }
}
