use super::*;

/// Tests listing members ordered by join date.
///
/// Verifies that members come back oldest first with their user profiles.
///
/// Expected: Ok(Vec<BandMember>) in join order
#[tokio::test]
async fn lists_members_in_join_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let founder = factory::user::UserFactory::new(db)
        .first_name("John")
        .build()
        .await?;
    let band = factory::create_band(db, founder.id).await?;
    let late = factory::create_user(db).await?;
    let now = Utc::now();

    factory::band_member::BandMemberFactory::new(db, band.id, late.id)
        .joined_at(now)
        .build()
        .await?;
    factory::band_member::BandMemberFactory::new(db, band.id, founder.id)
        .role("admin")
        .instrument("Guitar")
        .joined_at(now - Duration::days(30))
        .build()
        .await?;

    let repo = BandMemberRepository::new(db);
    let members = repo.get_by_band(band.id).await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user_id, founder.id);
    assert_eq!(members[0].first_name, "John");
    assert_eq!(members[0].role, MemberRole::Admin);
    assert_eq!(members[1].user_id, late.id);
    assert_eq!(members[1].role, MemberRole::Member);

    Ok(())
}

/// Tests that a corrupt stored role surfaces as an error instead of a default.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let band = factory::create_band(db, user.id).await?;
    factory::band_member::BandMemberFactory::new(db, band.id, user.id)
        .role("roadie")
        .build()
        .await?;

    let repo = BandMemberRepository::new(db);
    let result = repo.get_by_band(band.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
