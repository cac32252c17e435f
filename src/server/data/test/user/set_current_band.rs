use super::*;

/// Tests setting and clearing the current band.
///
/// Expected: current_band_id follows the stored value
#[tokio::test]
async fn sets_and_clears_current_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, band, _) = factory::create_band_with_admin(db).await?;

    let repo = UserRepository::new(db);

    repo.set_current_band(user.id, Some(band.id)).await?;
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.current_band_id, Some(band.id));

    repo.set_current_band(user.id, None).await?;
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.current_band_id, None);

    Ok(())
}

/// Tests listing users by their current band.
///
/// Expected: only users whose current band matches are returned
#[tokio::test]
async fn gets_ids_by_current_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let selected = factory::user::UserFactory::new(db)
        .current_band_id(band.id)
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_current_band(admin.id, Some(band.id)).await?;

    let mut ids = repo.get_ids_by_current_band(band.id).await?;
    ids.sort();

    assert_eq!(ids, vec![admin.id, selected.id]);

    Ok(())
}
