use super::*;

/// Tests that admins and members may edit.
///
/// Expected: Ok(User) for admin and member
#[tokio::test]
async fn grants_access_to_admin_and_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (member, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    for user_id in [admin.id, member.id] {
        auth_session.set_user_id(user_id).await?;
        assert!(guard.require(&[Permission::BandEditor(band.id)]).await.is_ok());
    }

    Ok(())
}

/// Tests that substitutes may not edit.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_substitute() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let (substitute, _) =
        factory::helpers::create_user_in_band(db, band.id, "substitute").await?;
    AuthSession::new(session).set_user_id(substitute.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BandEditor(band.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
