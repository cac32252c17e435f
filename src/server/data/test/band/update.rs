use super::*;

/// Tests replacing a band's editable fields.
///
/// Expected: Ok(Some(band)) with new name, description and cleared logo
#[tokio::test]
async fn replaces_band_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let band = factory::band::BandFactory::new(db, user.id)
        .name("Old Name")
        .logo_url("https://img.example/logo.png")
        .build()
        .await?;

    let repo = BandRepository::new(db);
    let updated = repo
        .update(UpdateBandParams {
            band_id: band.id,
            name: "New Name".to_string(),
            description: "Now with horns".to_string(),
            logo_url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.description, "Now with horns");
    assert_eq!(updated.logo_url, None);
    assert!(updated.updated_at >= band.updated_at);

    Ok(())
}

/// Tests updating a band that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BandRepository::new(db);
    let result = repo
        .update(UpdateBandParams {
            band_id: 42,
            name: "Ghost".to_string(),
            description: String::new(),
            logo_url: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
