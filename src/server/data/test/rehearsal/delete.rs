use super::*;

/// Tests deleting a rehearsal with attendance answers.
///
/// Expected: Ok(true) and no attendance rows left
#[tokio::test]
async fn deletes_rehearsal_and_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let rehearsal = factory::create_rehearsal(db, band.id, admin.id).await?;

    let repo = RehearsalRepository::new(db);
    repo.upsert_attendance(SetAttendanceParams {
        rehearsal_id: rehearsal.id,
        user_id: admin.id,
        status: AttendanceStatus::Maybe,
        note: Some("Might be late".to_string()),
    })
    .await?;

    assert!(repo.delete(rehearsal.id).await?);
    assert!(repo.find_by_id(rehearsal.id).await?.is_none());
    assert_eq!(
        entity::prelude::RehearsalAttendance::find().count(db).await?,
        0
    );
    assert!(!repo.delete(rehearsal.id).await?);

    Ok(())
}
