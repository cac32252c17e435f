use super::*;

/// Tests picking the band a user joined first.
///
/// Expected: the earliest joined band, ties broken by lowest band ID
#[tokio::test]
async fn picks_earliest_joined_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_band(db, user.id).await?;
    let second = factory::create_band(db, user.id).await?;
    let third = factory::create_band(db, user.id).await?;
    let joined = Utc::now() - Duration::days(10);

    factory::band_member::BandMemberFactory::new(db, third.id, user.id)
        .joined_at(joined)
        .build()
        .await?;
    factory::band_member::BandMemberFactory::new(db, second.id, user.id)
        .joined_at(joined)
        .build()
        .await?;
    factory::band_member::BandMemberFactory::new(db, first.id, user.id)
        .joined_at(joined + Duration::days(1))
        .build()
        .await?;

    let repo = BandMemberRepository::new(db);

    assert_eq!(repo.first_band_for_user(user.id).await?, Some(second.id));

    Ok(())
}

/// Tests a user without any membership.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BandMemberRepository::new(db);

    assert_eq!(repo.first_band_for_user(user.id).await?, None);

    Ok(())
}
