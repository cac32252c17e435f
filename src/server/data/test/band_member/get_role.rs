use super::*;

/// Tests looking up a member's role.
///
/// Expected: Some(role) for members and None for outsiders
#[tokio::test]
async fn returns_role_for_members_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (substitute, _) =
        factory::helpers::create_user_in_band(db, band.id, "substitute").await?;
    let outsider = factory::create_user(db).await?;

    let repo = BandMemberRepository::new(db);

    assert_eq!(
        repo.get_role(band.id, admin.id).await?,
        Some(MemberRole::Admin)
    );
    assert_eq!(
        repo.get_role(band.id, substitute.id).await?,
        Some(MemberRole::Substitute)
    );
    assert_eq!(repo.get_role(band.id, outsider.id).await?, None);

    Ok(())
}

/// Tests finding a membership with the member's profile.
///
/// Expected: Some(BandMember) for a member, None otherwise
#[tokio::test]
async fn finds_single_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, membership) = factory::create_band_with_admin(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = BandMemberRepository::new(db);

    let found = repo.find(band.id, admin.id).await?.unwrap();
    assert_eq!(found.id, membership.id);
    assert_eq!(found.first_name, admin.first_name);

    assert!(repo.find(band.id, outsider.id).await?.is_none());

    Ok(())
}
