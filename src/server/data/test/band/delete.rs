use super::*;

/// Tests deleting a band with members, rehearsals, attendance and setlists.
///
/// Verifies that every row belonging to the band is removed while rows of other
/// bands survive.
///
/// Expected: Ok(true) and no rows left for the deleted band
#[tokio::test]
async fn deletes_band_and_everything_it_owns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id, admin.id)
        .song("Help!", Some(140))
        .song("Yesterday", Some(125))
        .build()
        .await?;
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .setlist_id(setlist.id)
        .build()
        .await?;
    entity::rehearsal_attendance::ActiveModel {
        rehearsal_id: sea_orm::ActiveValue::Set(rehearsal.id),
        user_id: sea_orm::ActiveValue::Set(admin.id),
        status: sea_orm::ActiveValue::Set("going".to_string()),
        note: sea_orm::ActiveValue::Set(None),
        updated_at: sea_orm::ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let (other_admin, other_band, _) = factory::create_band_with_admin(db).await?;
    factory::create_rehearsal(db, other_band.id, other_admin.id).await?;

    let repo = BandRepository::new(db);
    let deleted = repo.delete(band.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Band::find_by_id(band.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::SetlistSong::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Setlist::find().count(db).await?, 0);
    assert_eq!(entity::prelude::RehearsalAttendance::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Rehearsal::find().count(db).await?, 1);
    assert_eq!(entity::prelude::BandMember::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a band that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BandRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}
