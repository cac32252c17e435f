use super::*;

/// Tests that moving the start time resets the reminder.
///
/// Expected: reminder_sent_at cleared and fields replaced
#[tokio::test]
async fn moving_start_clears_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let start = Utc::now() + Duration::minutes(30);
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(start)
        .reminder_sent_at(Utc::now())
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    let updated = repo
        .update(UpdateRehearsalParams {
            rehearsal_id: rehearsal.id,
            fields: fields("Moved", start + Duration::days(1)),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Moved");
    assert_eq!(updated.start_time, start + Duration::days(1));
    assert_eq!(updated.reminder_sent_at, None);

    Ok(())
}

/// Tests that editing other fields keeps the reminder state.
///
/// Expected: reminder_sent_at unchanged
#[tokio::test]
async fn keeps_reminder_when_start_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let start = Utc::now() + Duration::minutes(30);
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(start)
        .reminder_sent_at(Utc::now())
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    let updated = repo
        .update(UpdateRehearsalParams {
            rehearsal_id: rehearsal.id,
            fields: fields("Renamed", rehearsal.start_time),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(updated.reminder_sent_at.is_some());

    Ok(())
}

/// Tests updating a missing rehearsal.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_rehearsal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RehearsalRepository::new(db);
    let result = repo
        .update(UpdateRehearsalParams {
            rehearsal_id: 77,
            fields: fields("Nothing", Utc::now()),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
