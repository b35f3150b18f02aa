use sea_orm::DatabaseConnection;
use std::path::Path;

use crate::{
    model::battle::BattleImportDto,
    server::{
        data::battle::BattleRepository,
        error::AppError,
        model::{
            battle::{Battle, BattleSearchParams, CreateBattleParams},
            stats::BattleStats,
        },
    },
};

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches battles by the supplied filters
    pub async fn search(&self, params: BattleSearchParams) -> Result<Vec<Battle>, AppError> {
        let repo = BattleRepository::new(self.db);

        Ok(repo.search(params).await?)
    }

    /// Computes aggregate statistics over all battles
    pub async fn get_stats(&self) -> Result<BattleStats, AppError> {
        let repo = BattleRepository::new(self.db);

        Ok(repo.get_stats().await?)
    }

    /// Counts all battles
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = BattleRepository::new(self.db);

        Ok(repo.count().await?)
    }

    /// Lists all battles in store order
    pub async fn get_all(&self) -> Result<Vec<Battle>, AppError> {
        let repo = BattleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Loads battles from a JSON import file into an empty store
    ///
    /// The file must contain a JSON array of battle records. Nothing is read when
    /// the store already holds battles.
    ///
    /// # Returns
    /// - `Ok(inserted)`: Number of battles inserted; 0 when the store was not empty
    /// - `Err(AppError::IoErr)`: File could not be read
    /// - `Err(AppError::SerdeJsonErr)`: File is not a JSON array of battles
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn seed_from_file(&self, path: &Path) -> Result<u64, AppError> {
        let repo = BattleRepository::new(self.db);

        let existing = repo.count().await?;
        if existing > 0 {
            tracing::info!(
                "Skipping battle import from {}: store already holds {} battles",
                path.display(),
                existing
            );
            return Ok(0);
        }

        let contents = tokio::fs::read(path).await?;
        let records: Vec<BattleImportDto> = serde_json::from_slice(&contents)?;

        let params = records
            .into_iter()
            .map(CreateBattleParams::from_import)
            .collect();

        let inserted = repo.create_many(params).await?;

        tracing::info!("Imported {} battles from {}", inserted, path.display());

        Ok(inserted)
    }
}
