//! Create `song` table.
//! Rows are keyed by an auto-increment id; callers address them by `public_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(pk_auto(Song::Id))
                    .col(string_len(Song::PublicId, 36).not_null())
                    .col(string_len(Song::Title, 255).not_null())
                    .col(string_len(Song::Writer, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Song::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Song {
    Table,
    Id,
    PublicId,
    Title,
    Writer,
}
