use super::*;

/// Tests listing the bands of a user.
///
/// Verifies ordering by band name, the user's role per band and member counts, and
/// that bands the user does not belong to are excluded.
///
/// Expected: Ok(Vec<BandSummary>) with two bands in name order
#[tokio::test]
async fn lists_bands_of_user_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let zebra = factory::band::BandFactory::new(db, user.id)
        .name("Zebra Crossing")
        .build()
        .await?;
    let abbey = factory::band::BandFactory::new(db, other.id)
        .name("Abbey Road")
        .build()
        .await?;
    let unrelated = factory::band::BandFactory::new(db, other.id)
        .name("Unrelated")
        .build()
        .await?;

    factory::band_member::BandMemberFactory::new(db, zebra.id, user.id)
        .role("admin")
        .build()
        .await?;
    factory::band_member::BandMemberFactory::new(db, abbey.id, user.id)
        .role("substitute")
        .build()
        .await?;
    factory::band_member::BandMemberFactory::new(db, abbey.id, other.id)
        .role("admin")
        .build()
        .await?;
    factory::band_member::BandMemberFactory::new(db, unrelated.id, other.id)
        .role("admin")
        .build()
        .await?;

    let repo = BandRepository::new(db);
    let bands = repo.get_for_user(user.id).await?;

    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].name, "Abbey Road");
    assert_eq!(bands[0].role, MemberRole::Substitute);
    assert_eq!(bands[0].member_count, 2);
    assert_eq!(bands[1].name, "Zebra Crossing");
    assert_eq!(bands[1].role, MemberRole::Admin);
    assert_eq!(bands[1].member_count, 1);

    Ok(())
}

/// Tests listing bands for a user without memberships.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_user_without_bands() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BandRepository::new(db);
    let bands = repo.get_for_user(user.id).await?;

    assert!(bands.is_empty());

    Ok(())
}
