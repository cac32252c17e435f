use super::*;

/// Tests that a band admin passes the admin check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::BandAdmin(band.id)])
        .await?;

    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests that regular members are not admins.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let (member, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;
    AuthSession::new(session).set_user_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BandAdmin(band.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that being admin of another band does not help.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_of_other_band() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let (other_admin, _, _) = factory::create_band_with_admin(db).await?;
    AuthSession::new(session).set_user_id(other_admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BandAdmin(band.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
