use super::*;

/// Tests deleting a setlist referenced by a rehearsal.
///
/// Verifies that the rehearsal survives with its setlist reference cleared.
///
/// Expected: Ok(true), songs removed, rehearsal.setlist_id is None
#[tokio::test]
async fn deletes_setlist_and_detaches_rehearsals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id, admin.id)
        .song("Something", Some(182))
        .build()
        .await?;
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .setlist_id(setlist.id)
        .build()
        .await?;

    let repo = SetlistRepository::new(db);

    assert!(repo.delete(setlist.id).await?);
    assert!(repo.find_by_id(setlist.id).await?.is_none());
    assert_eq!(entity::prelude::SetlistSong::find().count(db).await?, 0);

    let stored = entity::prelude::Rehearsal::find_by_id(rehearsal.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.setlist_id, None);

    assert!(!repo.delete(setlist.id).await?);

    Ok(())
}
