use super::*;

/// Tests creating a setlist with songs.
///
/// Expected: songs stored at positions 0..n in the given order
#[tokio::test]
async fn creates_setlist_with_ordered_songs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;

    let repo = SetlistRepository::new(db);
    let setlist = repo
        .create(CreateSetlistParams {
            band_id: band.id,
            created_by: admin.id,
            name: "Hamburg".to_string(),
            description: None,
            songs: vec![song("Twist and Shout", Some(155)), song("Money", None)],
        })
        .await?;

    assert_eq!(setlist.name, "Hamburg");
    assert_eq!(setlist.songs.len(), 2);
    assert_eq!(setlist.songs[0].position, 0);
    assert_eq!(setlist.songs[0].title, "Twist and Shout");
    assert_eq!(setlist.songs[1].position, 1);
    assert_eq!(setlist.total_duration_seconds(), 155);

    let stored = repo.find_by_id(setlist.id).await?.unwrap();
    assert_eq!(stored, setlist);

    Ok(())
}
