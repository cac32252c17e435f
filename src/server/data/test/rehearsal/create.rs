use super::*;

/// Tests creating a rehearsal.
///
/// Expected: Ok(Rehearsal) with no attendance and no reminder sent
#[tokio::test]
async fn creates_rehearsal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let start = Utc::now() + Duration::days(2);

    let repo = RehearsalRepository::new(db);
    let rehearsal = repo
        .create(CreateRehearsalParams {
            band_id: band.id,
            created_by: admin.id,
            fields: fields("Weekly", start),
        })
        .await?;

    assert_eq!(rehearsal.band_id, band.id);
    assert_eq!(rehearsal.title, "Weekly");
    assert_eq!(rehearsal.location.as_deref(), Some("Cavern Club"));
    assert_eq!(rehearsal.created_by, admin.id);
    assert_eq!(rehearsal.reminder_sent_at, None);
    assert!(rehearsal.attendance.is_empty());

    let stored = repo.find_by_id(rehearsal.id).await?;
    assert_eq!(stored.map(|r| r.id), Some(rehearsal.id));

    Ok(())
}
