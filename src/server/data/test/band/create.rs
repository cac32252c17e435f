use super::*;

/// Tests creating a band.
///
/// Verifies that the band row is stored and that the creator becomes its admin
/// with the given instrument.
///
/// Expected: Ok(band) and one admin membership for the creator
#[tokio::test]
async fn creates_band_with_creator_as_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BandRepository::new(db);
    let band = repo
        .create(CreateBandParams {
            name: "The Beatles".to_string(),
            description: "Liverpool".to_string(),
            logo_url: None,
            instrument: "Rhythm guitar".to_string(),
            created_by: user.id,
        })
        .await?;

    assert_eq!(band.name, "The Beatles");
    assert_eq!(band.created_by, user.id);

    let members = entity::prelude::BandMember::find().all(db).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].band_id, band.id);
    assert_eq!(members[0].user_id, user.id);
    assert_eq!(members[0].role, "admin");
    assert_eq!(members[0].instrument, "Rhythm guitar");

    Ok(())
}
