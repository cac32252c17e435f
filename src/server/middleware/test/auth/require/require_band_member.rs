use super::*;

/// Tests that every role counts as a band member.
///
/// Expected: Ok(User) for admin, member and substitute
#[tokio::test]
async fn grants_access_to_every_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (admin, band, _) = factory::create_band_with_admin(db).await?;
    let (member, _) = factory::helpers::create_user_in_band(db, band.id, "member").await?;
    let (substitute, _) =
        factory::helpers::create_user_in_band(db, band.id, "substitute").await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    for user_id in [admin.id, member.id, substitute.id] {
        auth_session.set_user_id(user_id).await?;
        let user = guard.require(&[Permission::BandMember(band.id)]).await?;
        assert_eq!(user.id, user_id);
    }

    Ok(())
}

/// Tests that outsiders are denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, band, _) = factory::create_band_with_admin(db).await?;
    let outsider = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(outsider.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BandMember(band.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == outsider.id
    ));

    Ok(())
}
