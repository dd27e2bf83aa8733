#![cfg(test)]
use std::sync::Arc;

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;

use crate::{DefaultSongService, SeaOrmSongRepository, SongService};

/// Fresh in-memory database per test, migrated with the real migrator.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn song_service() -> Result<Arc<DefaultSongService>, anyhow::Error> {
    let db = get_db().await?;
    Ok(Arc::new(SongService::new(db, Arc::new(SeaOrmSongRepository))))
}
