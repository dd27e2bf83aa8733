use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Song: public handle must stay unique for the lifetime of the store
        manager
            .create_index(
                Index::create()
                    .name("idx_song_public_id")
                    .table(Song::Table)
                    .col(Song::PublicId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_song_public_id").table(Song::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Song { Table, PublicId }
