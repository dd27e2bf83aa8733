use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use models::song;
use crate::errors::ServiceError;

/// Storage operations the song service relies on.
///
/// Every call runs on the connection it is handed, which is normally an open
/// transaction owned by the service.
#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn find_by_public_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        public_id: &str,
    ) -> Result<Option<song::Model>, ServiceError>;
    async fn exists_by_public_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        public_id: &str,
    ) -> Result<bool, ServiceError>;
    /// Returns the number of rows removed.
    async fn delete_by_public_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        public_id: &str,
    ) -> Result<u64, ServiceError>;
    /// Inserts when `id` is not set, otherwise updates the existing row.
    async fn save<C: ConnectionTrait>(
        &self,
        conn: &C,
        am: song::ActiveModel,
    ) -> Result<song::Model, ServiceError>;
    /// First `limit` songs in ascending `id` order.
    async fn find_all_ordered_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        limit: u64,
    ) -> Result<Vec<song::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeaOrmSongRepository;

#[async_trait]
impl SongRepository for SeaOrmSongRepository {
    async fn find_by_public_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        public_id: &str,
    ) -> Result<Option<song::Model>, ServiceError> {
        song::Entity::find()
            .filter(song::Column::PublicId.eq(public_id))
            .one(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn exists_by_public_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        public_id: &str,
    ) -> Result<bool, ServiceError> {
        let n = song::Entity::find()
            .filter(song::Column::PublicId.eq(public_id))
            .count(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }

    async fn delete_by_public_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        public_id: &str,
    ) -> Result<u64, ServiceError> {
        let res = song::Entity::delete_many()
            .filter(song::Column::PublicId.eq(public_id))
            .exec(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }

    async fn save<C: ConnectionTrait>(
        &self,
        conn: &C,
        am: song::ActiveModel,
    ) -> Result<song::Model, ServiceError> {
        let saved = match am.id {
            ActiveValue::NotSet => am.insert(conn).await,
            _ => am.update(conn).await,
        };
        saved.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all_ordered_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        limit: u64,
    ) -> Result<Vec<song::Model>, ServiceError> {
        song::Entity::find()
            .order_by_asc(song::Column::Id)
            .paginate(conn, limit)
            .fetch_page(0)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
