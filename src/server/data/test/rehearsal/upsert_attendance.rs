use super::*;

/// Tests that answering twice replaces the first answer.
///
/// Expected: a single attendance row with the latest status and note
#[tokio::test]
async fn replaces_existing_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let rehearsal = factory::create_rehearsal(db, band.id, admin.id).await?;

    let repo = RehearsalRepository::new(db);
    let first = repo
        .upsert_attendance(SetAttendanceParams {
            rehearsal_id: rehearsal.id,
            user_id: admin.id,
            status: AttendanceStatus::Going,
            note: None,
        })
        .await?;
    assert_eq!(first.status, AttendanceStatus::Going);
    assert_eq!(first.first_name, admin.first_name);

    let second = repo
        .upsert_attendance(SetAttendanceParams {
            rehearsal_id: rehearsal.id,
            user_id: admin.id,
            status: AttendanceStatus::NotGoing,
            note: Some("Sick".to_string()),
        })
        .await?;

    assert_eq!(second.status, AttendanceStatus::NotGoing);
    assert_eq!(second.note.as_deref(), Some("Sick"));
    assert_eq!(
        entity::prelude::RehearsalAttendance::find().count(db).await?,
        1
    );

    let stored = repo.find_by_id(rehearsal.id).await?.unwrap();
    assert_eq!(stored.attendance, vec![second]);

    Ok(())
}
