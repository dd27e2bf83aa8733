
/// CRUD operations tests for the song entity
pub mod crud_tests;


use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Set};

use crate::db::{connect_with_config, DatabaseConfig};
use crate::song;

/// Fresh in-memory database with the full schema applied.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Insert a row directly through the entity, bypassing any service logic.
pub(crate) async fn insert_song<C: ConnectionTrait>(
    db: &C,
    title: &str,
    writer: &str,
) -> Result<song::Model> {
    let am = song::ActiveModel {
        public_id: Set(song::new_public_id()),
        title: Set(title.to_string()),
        writer: Set(writer.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
