use super::*;

/// Tests listing a band's setlists by name with their songs.
///
/// Expected: the band's two setlists in name order, other bands excluded
#[tokio::test]
async fn lists_setlists_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (other_admin, other_band, _) = factory::create_band_with_admin(db).await?;

    factory::setlist::SetlistFactory::new(db, band.id, admin.id)
        .name("Encore")
        .song("Hey Jude", Some(431))
        .build()
        .await?;
    factory::setlist::SetlistFactory::new(db, band.id, admin.id)
        .name("Acoustic")
        .song("Blackbird", Some(138))
        .song("Michelle", Some(162))
        .build()
        .await?;
    factory::create_setlist(db, other_band.id, other_admin.id).await?;

    let repo = SetlistRepository::new(db);
    let setlists = repo.get_by_band(band.id).await?;

    let names: Vec<&str> = setlists.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Acoustic", "Encore"]);
    assert_eq!(setlists[0].songs.len(), 2);
    assert_eq!(setlists[0].total_duration_seconds(), 300);
    assert_eq!(setlists[1].songs.len(), 1);

    Ok(())
}
