use super::*;

/// Tests listing a band's rehearsals in start order within a window.
///
/// Verifies that `from` is inclusive, `to` is exclusive, other bands are excluded
/// and attendance is attached to each rehearsal.
///
/// Expected: Ok(Vec<Rehearsal>) with the two rehearsals inside the window
#[tokio::test]
async fn lists_rehearsals_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (other_admin, other_band, _) = factory::create_band_with_admin(db).await?;
    let base = Utc::now() + Duration::days(1);

    let later = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .title("Later")
        .start_time(base + Duration::days(2))
        .build()
        .await?;
    let first = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .title("First")
        .start_time(base)
        .build()
        .await?;
    factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .title("Outside")
        .start_time(base + Duration::days(7))
        .build()
        .await?;
    factory::rehearsal::RehearsalFactory::new(db, other_band.id, other_admin.id)
        .start_time(base)
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    repo.upsert_attendance(SetAttendanceParams {
        rehearsal_id: first.id,
        user_id: admin.id,
        status: AttendanceStatus::Going,
        note: None,
    })
    .await?;

    let rehearsals = repo
        .get_by_band(RehearsalFilter {
            band_id: band.id,
            from: Some(base),
            to: Some(base + Duration::days(7)),
        })
        .await?;

    let ids: Vec<i32> = rehearsals.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, later.id]);
    assert_eq!(rehearsals[0].attendance.len(), 1);
    assert_eq!(rehearsals[0].attendance[0].user_id, admin.id);
    assert!(rehearsals[1].attendance.is_empty());

    Ok(())
}

/// Tests listing without a window.
///
/// Expected: every rehearsal of the band
#[tokio::test]
async fn lists_all_without_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    factory::create_rehearsal(db, band.id, admin.id).await?;
    factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .start_time(Utc::now() - Duration::days(3))
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    let rehearsals = repo
        .get_by_band(RehearsalFilter {
            band_id: band.id,
            from: None,
            to: None,
        })
        .await?;

    assert_eq!(rehearsals.len(), 2);
    assert!(rehearsals[0].start_time < rehearsals[1].start_time);

    Ok(())
}
