//! Query and mutation resolvers.
//!
//! Each operation forwards its arguments to [`SongService`] and returns the
//! result untouched; transports bind these names to their own wire format.

use std::sync::Arc;

use models::song;

use crate::errors::ServiceError;
use crate::song::{repository::SongRepository, service::SongService};

/// Read operations: `song`, `songs`.
pub struct SongQuery<R: SongRepository> {
    service: Arc<SongService<R>>,
}

impl<R: SongRepository> SongQuery<R> {
    pub fn new(service: Arc<SongService<R>>) -> Self { Self { service } }

    pub async fn song(&self, public_id: &str) -> Result<song::Model, ServiceError> {
        self.service.get_song(public_id).await
    }

    pub async fn songs(&self, size: i32) -> Result<Vec<song::Model>, ServiceError> {
        self.service.get_songs(size).await
    }
}

/// Write operations: `createSong`, `updateSong`, `deleteSong`.
pub struct SongMutation<R: SongRepository> {
    service: Arc<SongService<R>>,
}

impl<R: SongRepository> SongMutation<R> {
    pub fn new(service: Arc<SongService<R>>) -> Self { Self { service } }

    pub async fn create_song(&self, title: &str, writer: &str) -> Result<song::Model, ServiceError> {
        self.service.create_song(title, writer).await
    }

    pub async fn update_song(
        &self,
        public_id: &str,
        title: &str,
        writer: &str,
    ) -> Result<song::Model, ServiceError> {
        self.service.update_song(public_id, title, writer).await
    }

    pub async fn delete_song(&self, public_id: &str) -> Result<Option<String>, ServiceError> {
        self.service.delete_song(public_id).await
    }
}
