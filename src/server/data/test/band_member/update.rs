use super::*;

/// Tests changing a member's role and instrument.
///
/// Expected: Ok(Some(BandMember)) with the new values
#[tokio::test]
async fn updates_role_and_instrument() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let (user, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;

    let repo = BandMemberRepository::new(db);
    let updated = repo
        .update(UpdateMemberParams {
            band_id: band.id,
            user_id: user.id,
            role: MemberRole::Admin,
            instrument: "Keys".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.role, MemberRole::Admin);
    assert_eq!(updated.instrument, "Keys");

    Ok(())
}

/// Tests updating a user who is not a member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = BandMemberRepository::new(db);
    let result = repo
        .update(UpdateMemberParams {
            band_id: band.id,
            user_id: outsider.id,
            role: MemberRole::Member,
            instrument: String::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests demoting admins one after another.
///
/// Expected: the first of two admins is demoted, the remaining one is refused and
/// keeps the admin role
#[tokio::test]
async fn refuses_to_demote_last_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (second, _) = factory::helpers::create_user_in_band(db, band.id, "admin").await?;

    let repo = BandMemberRepository::new(db);
    let demote = |user_id| UpdateMemberParams {
        band_id: band.id,
        user_id,
        role: MemberRole::Substitute,
        instrument: "Tambourine".to_string(),
    };

    let first = repo.update(demote(admin.id)).await?;
    assert_eq!(first.map(|member| member.role), Some(MemberRole::Substitute));

    let last = repo.update(demote(second.id)).await?;
    assert!(last.is_none());
    assert_eq!(repo.get_role(band.id, second.id).await?, Some(MemberRole::Admin));
    let admins = repo
        .get_by_band(band.id)
        .await?
        .into_iter()
        .filter(|member| member.role == MemberRole::Admin)
        .count();
    assert_eq!(admins, 1);

    Ok(())
}
