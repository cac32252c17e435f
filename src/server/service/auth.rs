//! Password authentication.
//!
//! Registration and login against locally stored Argon2id password hashes. Hashing is
//! CPU heavy, so it runs on the blocking thread pool instead of an async worker.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParams, LoginParams, RegisterParams, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(params.password).await?;

        let user = repo
            .create(CreateUserParams {
                email: params.email,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Email is already registered".to_string())
                }
                _ => err.into(),
            })?;

        tracing::info!(user_id = user.id, "Registered new user");

        Ok(user)
    }

    /// Checks email and password.
    ///
    /// Unknown emails and wrong passwords fail with the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(params.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Hashes a password into an Argon2id PHC string with a random salt.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(InternalError::from)?
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash)
}

/// Verifies a password against a stored PHC string.
///
/// A stored value that is not a valid PHC string (such as a disabled account marker)
/// never matches.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the stored hash is unusable
/// - `Err(AppError::InternalErr)` - The blocking task failed
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(InternalError::from)?;

    Ok(matches)
}
