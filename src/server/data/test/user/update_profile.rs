use super::*;

/// Tests that a profile update only changes the supplied fields.
///
/// Expected: last name changed, first name and image untouched
#[tokio::test]
async fn merges_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Ringo")
        .last_name("Starkey")
        .profile_image_url("https://img.example/ringo.png")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            first_name: None,
            last_name: Some("Starr".to_string()),
            profile_image_url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Ringo");
    assert_eq!(updated.last_name, "Starr");
    assert_eq!(
        updated.profile_image_url.as_deref(),
        Some("https://img.example/ringo.png")
    );

    Ok(())
}

/// Tests clearing the profile image with an explicit null.
///
/// Expected: profile_image_url is None afterwards
#[tokio::test]
async fn clears_profile_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .profile_image_url("https://img.example/old.png")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            first_name: None,
            last_name: None,
            profile_image_url: Some(None),
        })
        .await?
        .unwrap();

    assert_eq!(updated.profile_image_url, None);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParams {
            user_id: 999,
            first_name: Some("Nobody".to_string()),
            last_name: None,
            profile_image_url: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
