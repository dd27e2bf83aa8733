use std::sync::Arc;

use sea_orm::{
    AccessMode, ActiveValue, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument};

use models::song;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;
use crate::song::repository::SongRepository;

/// Application service for songs.
///
/// Holds no state besides the pool and the repository. Every operation runs in
/// its own transaction: writes commit together or not at all, and a
/// transaction dropped on an error path is rolled back.
pub struct SongService<R: SongRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
}

impl<R: SongRepository> SongService<R> {
    pub fn new(db: DatabaseConnection, repo: Arc<R>) -> Self { Self { db, repo } }

    async fn begin_write(&self) -> Result<DatabaseTransaction, ServiceError> {
        self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn begin_read(&self) -> Result<DatabaseTransaction, ServiceError> {
        // SQLite has no per-transaction access mode
        let access_mode = match self.db.get_database_backend() {
            DbBackend::Sqlite => None,
            _ => Some(AccessMode::ReadOnly),
        };
        self.db
            .begin_with_config(None, access_mode)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn commit(txn: DatabaseTransaction) -> Result<(), ServiceError> {
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    /// Song by public id; `NotFound` when no row matches.
    #[instrument(skip(self))]
    pub async fn get_song(&self, public_id: &str) -> Result<song::Model, ServiceError> {
        song::validate_public_id(public_id)?;
        let txn = self.begin_read().await?;
        let found = self
            .repo
            .find_by_public_id(&txn, public_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("song"))?;
        Self::commit(txn).await?;
        Ok(found)
    }

    /// Up to `size` songs, oldest first. Non-positive sizes give an empty list.
    #[instrument(skip(self))]
    pub async fn get_songs(&self, size: i32) -> Result<Vec<song::Model>, ServiceError> {
        let Some(limit) = PageRequest::first(size).normalize() else {
            debug!(size, "non-positive page size; returning empty list");
            return Ok(Vec::new());
        };
        let txn = self.begin_read().await?;
        let rows = self.repo.find_all_ordered_by_id(&txn, limit).await?;
        Self::commit(txn).await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn create_song(&self, title: &str, writer: &str) -> Result<song::Model, ServiceError> {
        song::validate_title(title)?;
        song::validate_writer(writer)?;
        let am = song::ActiveModel {
            id: ActiveValue::NotSet,
            public_id: Set(song::new_public_id()),
            title: Set(title.to_string()),
            writer: Set(writer.to_string()),
        };

        let txn = self.begin_write().await?;
        let created = self.repo.save(&txn, am).await?;
        Self::commit(txn).await?;
        info!(public_id = %created.public_id, "created song");
        Ok(created)
    }

    /// Overwrite title and writer; `public_id` and the internal id are kept.
    #[instrument(skip(self))]
    pub async fn update_song(
        &self,
        public_id: &str,
        title: &str,
        writer: &str,
    ) -> Result<song::Model, ServiceError> {
        song::validate_public_id(public_id)?;
        song::validate_title(title)?;
        song::validate_writer(writer)?;

        let txn = self.begin_write().await?;
        let existing = self
            .repo
            .find_by_public_id(&txn, public_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("song"))?;
        let mut am: song::ActiveModel = existing.into();
        am.title = Set(title.to_string());
        am.writer = Set(writer.to_string());
        let updated = self.repo.save(&txn, am).await?;
        Self::commit(txn).await?;
        info!(public_id = %updated.public_id, "updated song");
        Ok(updated)
    }

    /// Returns the public id when a song was removed, `None` when nothing matched.
    #[instrument(skip(self))]
    pub async fn delete_song(&self, public_id: &str) -> Result<Option<String>, ServiceError> {
        song::validate_public_id(public_id)?;
        let txn = self.begin_write().await?;
        if !self.repo.exists_by_public_id(&txn, public_id).await? {
            Self::commit(txn).await?;
            debug!(public_id, "delete requested for unknown song");
            return Ok(None);
        }
        self.repo.delete_by_public_id(&txn, public_id).await?;
        Self::commit(txn).await?;
        info!(public_id, "deleted song");
        Ok(Some(public_id.to_string()))
    }
}
