use super::*;

/// Tests detecting a shared band between two users.
///
/// Expected: true for bandmates, false for users in different bands
#[tokio::test]
async fn detects_shared_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (bandmate, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;
    let (stranger, _, _) = factory::create_band_with_admin(db).await?;
    let loner = factory::create_user(db).await?;

    let repo = BandMemberRepository::new(db);

    assert!(repo.share_band(admin.id, bandmate.id).await?);
    assert!(repo.share_band(bandmate.id, admin.id).await?);
    assert!(!repo.share_band(admin.id, stranger.id).await?);
    assert!(!repo.share_band(loner.id, admin.id).await?);

    Ok(())
}
