use super::*;
use crate::{
    model::rehearsal::AttendanceStatus,
    server::{data::rehearsal::RehearsalRepository, model::rehearsal::SetAttendanceParams},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests removing a member.
///
/// Expected: Ok(true) the first time, Ok(false) once the membership is gone
#[tokio::test]
async fn removes_member_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let (user, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;

    let repo = BandMemberRepository::new(db);

    assert!(repo.delete(band.id, user.id).await?);
    assert!(!repo.delete(band.id, user.id).await?);
    assert_eq!(repo.get_role(band.id, user.id).await?, None);

    Ok(())
}

/// Tests removing admins one after another.
///
/// Expected: the first of two admins is removed, the remaining one is refused
#[tokio::test]
async fn refuses_to_remove_last_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (second, _) = factory::helpers::create_user_in_band(db, band.id, "admin").await?;

    let repo = BandMemberRepository::new(db);

    assert!(repo.delete(band.id, admin.id).await?);
    assert!(!repo.delete(band.id, second.id).await?);
    assert_eq!(repo.get_role(band.id, second.id).await?, Some(MemberRole::Admin));

    Ok(())
}

/// Tests that removal drops the member's attendance for this band only.
///
/// Expected: answers for the band's rehearsals are gone, answers elsewhere remain
#[tokio::test]
async fn removes_attendance_for_band_rehearsals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (other_admin, other_band, _) = factory::create_band_with_admin(db).await?;
    let (user, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;
    factory::band_member::BandMemberFactory::new(db, other_band.id, user.id)
        .build()
        .await?;

    let here = factory::rehearsal::RehearsalFactory::new(db, band.id, admin.id)
        .build()
        .await?;
    let elsewhere = factory::rehearsal::RehearsalFactory::new(db, other_band.id, other_admin.id)
        .build()
        .await?;
    for rehearsal_id in [here.id, elsewhere.id] {
        RehearsalRepository::new(db)
            .upsert_attendance(SetAttendanceParams {
                rehearsal_id,
                user_id: user.id,
                status: AttendanceStatus::Going,
                note: None,
            })
            .await?;
    }

    assert!(BandMemberRepository::new(db).delete(band.id, user.id).await?);

    let remaining: Vec<i32> = entity::prelude::RehearsalAttendance::find()
        .filter(entity::rehearsal_attendance::Column::UserId.eq(user.id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.rehearsal_id)
        .collect();
    assert_eq!(remaining, vec![elsewhere.id]);

    Ok(())
}
