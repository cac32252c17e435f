//! Authentication and band permission guard.
//!
//! Controllers build an `AuthGuard` from the shared database connection and the request
//! session, then call `require` with the permissions the operation needs. Permissions are
//! scoped to a band and derived from the caller's membership role.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::band::MemberRole,
    server::{
        data::{band_member::BandMemberRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Permission a user must hold for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any role in the band; view band data and answer attendance.
    BandMember(i32),
    /// Admin or member of the band; edit setlists.
    BandEditor(i32),
    /// Admin of the band; manage the band, its members and rehearsals.
    BandAdmin(i32),
}

impl Permission {
    fn band_id(&self) -> i32 {
        match self {
            Self::BandMember(band_id) | Self::BandEditor(band_id) | Self::BandAdmin(band_id) => {
                *band_id
            }
        }
    }

    fn is_granted_to(&self, role: MemberRole) -> bool {
        match self {
            Self::BandMember(_) => true,
            Self::BandEditor(_) => role.can_edit_setlists(),
            Self::BandAdmin(_) => role == MemberRole::Admin,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Authenticates the session user and checks every given permission.
    ///
    /// Pass an empty slice to only require a logged in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        self.check(&user, permissions).await?;

        Ok(user)
    }

    /// Checks permissions for an already authenticated user.
    ///
    /// Used when the band of a resource is only known after loading it, such as a
    /// rehearsal or setlist addressed by its own ID.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions granted
    /// - `Err(AuthError::AccessDenied)` - The user is not a member or their role is too low
    pub async fn check(&self, user: &User, permissions: &[Permission]) -> Result<(), AppError> {
        let member_repo = BandMemberRepository::new(self.db);

        for permission in permissions {
            let band_id = permission.band_id();
            let role = member_repo.get_role(band_id, user.id).await?;

            match role {
                Some(role) if permission.is_granted_to(role) => {}
                Some(role) => {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!(
                            "role {} in band {} does not grant {:?}",
                            role, band_id, permission
                        ),
                    )
                    .into());
                }
                None => {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!("not a member of band {}", band_id),
                    )
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Checks that `user` may remove the member `user_id` from a band.
    ///
    /// Any member may remove themselves; removing someone else takes an admin.
    ///
    /// # Returns
    /// - `Ok(())` - Removal allowed
    /// - `Err(AuthError::AccessDenied)` - Not a member, or not an admin removing someone else
    pub async fn check_member_removal(
        &self,
        user: &User,
        band_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        if user.id == user_id {
            self.check(user, &[Permission::BandMember(band_id)]).await
        } else {
            self.check(user, &[Permission::BandAdmin(band_id)]).await
        }
    }
}
