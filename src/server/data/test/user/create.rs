use super::*;

/// Tests creating a user account.
///
/// Verifies that the stored user carries the given fields and starts without a
/// profile image or current band.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "paul@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            first_name: "Paul".to_string(),
            last_name: "McCartney".to_string(),
        })
        .await?;

    assert_eq!(user.email, "paul@example.com");
    assert_eq!(user.first_name, "Paul");
    assert_eq!(user.profile_image_url, None);
    assert_eq!(user.current_band_id, None);

    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests that a second account with the same email is rejected by the database.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = CreateUserParams {
        email: "john@example.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        first_name: "John".to_string(),
        last_name: "Lennon".to_string(),
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
