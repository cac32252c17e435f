use super::*;

/// Tests replacing a setlist's songs.
///
/// Verifies that old songs are removed and new ones renumbered from zero.
///
/// Expected: Ok(Some(Setlist)) containing exactly the new songs
#[tokio::test]
async fn replaces_songs_and_renumbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id, admin.id)
        .song("Old One", Some(100))
        .song("Old Two", Some(100))
        .song("Old Three", Some(100))
        .build()
        .await?;

    let repo = SetlistRepository::new(db);
    let updated = repo
        .update(UpdateSetlistParams {
            setlist_id: setlist.id,
            name: "Reworked".to_string(),
            description: Some("Shorter".to_string()),
            songs: vec![song("Get Back", Some(191)), song("Let It Be", Some(243))],
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Reworked");
    assert_eq!(updated.description.as_deref(), Some("Shorter"));
    let titles: Vec<(i32, &str)> = updated
        .songs
        .iter()
        .map(|s| (s.position, s.title.as_str()))
        .collect();
    assert_eq!(titles, vec![(0, "Get Back"), (1, "Let It Be")]);
    assert_eq!(entity::prelude::SetlistSong::find().count(db).await?, 2);

    Ok(())
}

/// Tests updating a missing setlist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_setlist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SetlistRepository::new(db);
    let result = repo
        .update(UpdateSetlistParams {
            setlist_id: 5,
            name: "Nothing".to_string(),
            description: None,
            songs: Vec::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
