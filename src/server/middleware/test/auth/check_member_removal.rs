use super::*;

/// Tests a member removing themselves from the band.
///
/// Expected: Ok(()) for every role
#[tokio::test]
async fn allows_leaving_the_band() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let guard = AuthGuard::new(db, session);

    for role in ["member", "substitute"] {
        let (user, _) = factory::helpers::create_user_in_band(db, band.id, role).await?;
        let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

        guard.check_member_removal(&user, band.id, user.id).await?;
    }

    Ok(())
}

/// Tests an admin removing another member.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_admin_to_remove_others() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (member, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;
    let admin = UserRepository::new(db).find_by_id(admin.id).await?.unwrap();

    AuthGuard::new(db, session)
        .check_member_removal(&admin, band.id, member.id)
        .await?;

    Ok(())
}

/// Tests non-admins removing someone else.
///
/// Expected: Err(AuthError::AccessDenied) for a substitute and a member
#[tokio::test]
async fn denies_non_admin_removing_others() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let guard = AuthGuard::new(db, session);

    for role in ["substitute", "member"] {
        let (user, _) = factory::helpers::create_user_in_band(db, band.id, role).await?;
        let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();

        let result = guard.check_member_removal(&user, band.id, admin.id).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    Ok(())
}

/// Tests an outsider trying to leave a band they are not in.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_outsider() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let outsider = factory::create_user(db).await?;
    let outsider = UserRepository::new(db).find_by_id(outsider.id).await?.unwrap();

    let result = AuthGuard::new(db, session)
        .check_member_removal(&outsider, band.id, outsider.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
