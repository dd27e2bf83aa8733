use crate::song;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use anyhow::Result;

use super::{insert_song, setup_test_db};

/// Test song CRUD operations
#[tokio::test]
async fn test_song_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = insert_song(&db, "Imagine", "Lennon").await?;
    assert!(created.id > 0);
    assert_eq!(created.title, "Imagine");
    assert_eq!(created.writer, "Lennon");
    assert_eq!(created.public_id.len(), 36);

    // Read by public id
    let found = song::Entity::find()
        .filter(song::Column::PublicId.eq(created.public_id.clone()))
        .one(&db)
        .await?
        .expect("song by public id");
    assert_eq!(found, created);

    // Update
    let mut am: song::ActiveModel = found.into();
    am.title = Set("Imagine (Remastered)".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.public_id, created.public_id);
    assert_eq!(updated.title, "Imagine (Remastered)");

    // Delete
    let res = song::Entity::delete_many()
        .filter(song::Column::PublicId.eq(created.public_id.clone()))
        .exec(&db)
        .await?;
    assert_eq!(res.rows_affected, 1);
    assert!(song::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_ids_follow_insertion_order() -> Result<()> {
    let db = setup_test_db().await?;
    let a = insert_song(&db, "Imagine", "Lennon").await?;
    let b = insert_song(&db, "Hey Jude", "McCartney").await?;
    assert!(a.id < b.id);

    let rows = song::Entity::find().order_by_asc(song::Column::Id).all(&db).await?;
    let titles: Vec<_> = rows.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Imagine", "Hey Jude"]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_public_id_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let first = insert_song(&db, "Yesterday", "McCartney").await?;

    let dup = song::ActiveModel {
        public_id: Set(first.public_id.clone()),
        title: Set("Something".into()),
        writer: Set("Harrison".into()),
        ..Default::default()
    };
    assert!(dup.insert(&db).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_column_width_matches_validation_limit() -> Result<()> {
    let db = setup_test_db().await?;
    let longest = "x".repeat(song::MAX_TEXT_LEN);
    assert!(song::validate_title(&longest).is_ok());
    let stored = insert_song(&db, &longest, "Lennon").await?;
    assert_eq!(stored.title.chars().count(), song::MAX_TEXT_LEN);
    assert!(song::validate_title(&format!("{longest}x")).is_err());
    Ok(())
}
