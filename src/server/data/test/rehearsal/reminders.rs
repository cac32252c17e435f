use super::*;

/// Tests selecting rehearsals whose reminder is due.
///
/// Verifies that only unsent reminders for rehearsals starting within the lead time
/// and not yet started are returned.
///
/// Expected: only the rehearsal starting in 30 minutes without a sent reminder
#[tokio::test]
async fn selects_due_reminders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let now = Utc::now();

    let due = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(now + Duration::minutes(30))
        .build()
        .await?;
    factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(now + Duration::minutes(20))
        .reminder_sent_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(now + Duration::hours(3))
        .build()
        .await?;
    factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(now - Duration::minutes(10))
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    let reminders = repo.get_due_reminders(now, Duration::minutes(60)).await?;

    let ids: Vec<i32> = reminders.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![due.id]);

    Ok(())
}

/// Tests that a marked reminder is no longer due.
///
/// Expected: empty result after marking
#[tokio::test]
async fn marked_reminder_is_not_due_again() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let now = Utc::now();
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(now + Duration::minutes(15))
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    repo.mark_reminder_sent(rehearsal.id, now).await?;

    let reminders = repo.get_due_reminders(now, Duration::minutes(60)).await?;
    assert!(reminders.is_empty());

    let stored = repo.find_by_id(rehearsal.id).await?.unwrap();
    assert!(stored.reminder_sent_at.is_some());

    Ok(())
}

/// Tests a lead time that reaches past the last representable date.
///
/// Expected: Err(DbErr::Custom) rather than a panic
#[tokio::test]
async fn rejects_lead_past_the_end_of_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RehearsalRepository::new(db)
        .get_due_reminders(Utc::now(), Duration::days(100_000_000))
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
