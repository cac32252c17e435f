//! Type-safe session management wrapper.
//!
//! The browser session is the only credential the API knows about. `AuthSession` wraps
//! the tower-sessions `Session` and exposes just the authentication state, keeping the
//! session key and value type in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's ID and the session
/// lifecycle operations around login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Logs the user in on this session.
    ///
    /// Cycles the session ID first so a session ID obtained before login cannot be
    /// reused afterwards, then stores the user ID.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to update the session
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Stores the user's ID in the session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Deletes the session and its stored data.
    ///
    /// Used during logout. The session cookie is expired on the response.
    ///
    /// # Returns
    /// - `Ok(())` - Session removed
    /// - `Err(AppError::SessionErr(_))` - Failed to delete the session from the store
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
