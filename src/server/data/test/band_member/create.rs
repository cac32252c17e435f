use super::*;

/// Tests adding a user to a band.
///
/// Expected: Ok(BandMember) with the given role and instrument
#[tokio::test]
async fn adds_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let user = factory::user::UserFactory::new(db)
        .first_name("Pete")
        .build()
        .await?;

    let repo = BandMemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            band_id: band.id,
            user_id: user.id,
            role: MemberRole::Substitute,
            instrument: "Drums".to_string(),
        })
        .await?;

    assert_eq!(member.band_id, band.id);
    assert_eq!(member.user_id, user.id);
    assert_eq!(member.first_name, "Pete");
    assert_eq!(member.role, MemberRole::Substitute);
    assert_eq!(member.instrument, "Drums");

    Ok(())
}
