use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) for the stored email and Ok(None) for an unknown one
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("george@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("george@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let missing = repo.find_by_email("ringo@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the email existence check used during registration.
///
/// Expected: true for a stored email, false otherwise
#[tokio::test]
async fn reports_whether_email_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);

    Ok(())
}
