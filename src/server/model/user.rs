//! User domain models and parameters.
//!
//! Provides the user account model along with parameter types for registration,
//! login and profile updates. Parameter constructors validate and normalize the
//! incoming DTOs before they reach the service layer.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, RegisterDto, UpdateProfileDto, UserDto, UserProfileDto},
    server::{
        error::AppError,
        util::validate::{self, MAX_NAME_LENGTH, MAX_URL_LENGTH},
    },
};

/// Registered user account.
///
/// The password hash is only used for credential checks and is never converted
/// into a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased email address used to log in.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    /// Band currently selected by the user, if any.
    pub current_band_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            profile_image_url: entity.profile_image_url,
            current_band_id: entity.current_band_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user into the account DTO returned to the user themself.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image_url: self.profile_image_url,
            current_band_id: self.current_band_id,
            created_at: self.created_at,
        }
    }

    /// Converts the user into the public profile shown to bandmates.
    pub fn into_profile_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image_url: self.profile_image_url,
        }
    }
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    /// Plain text password, hashed by the auth service.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterParams {
    /// Validates a registration DTO.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Email lowercased and trimmed, names trimmed
    /// - `Err(AppError::BadRequest)` - Invalid email, short password or blank names
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let email = validate::email(&dto.email)?;
        validate::password(&dto.password)?;

        Ok(Self {
            email,
            password: dto.password,
            first_name: validate::required_text("First name", &dto.first_name, MAX_NAME_LENGTH)?,
            last_name: validate::required_text("Last name", &dto.last_name, MAX_NAME_LENGTH)?,
        })
    }
}

/// Login request with the email normalized for lookup.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    /// Normalizes the email without validating its shape, so malformed input simply
    /// fails to match an account.
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial profile update applied with merge semantics.
///
/// `None` leaves a field untouched. For `profile_image_url`, `Some(None)` clears the
/// stored image.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<Option<String>>,
}

impl UpdateProfileParams {
    /// Validates the supplied fields of a profile update DTO.
    ///
    /// Supplied names follow the registration rules. A blank image URL is treated
    /// the same as `null`.
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Result<Self, AppError> {
        let first_name = dto
            .first_name
            .map(|name| validate::required_text("First name", &name, MAX_NAME_LENGTH))
            .transpose()?;
        let last_name = dto
            .last_name
            .map(|name| validate::required_text("Last name", &name, MAX_NAME_LENGTH))
            .transpose()?;
        let profile_image_url = dto
            .profile_image_url
            .map(|url| validate::optional_text("Profile image URL", url, MAX_URL_LENGTH))
            .transpose()?;

        Ok(Self {
            user_id,
            first_name,
            last_name,
            profile_image_url,
        })
    }
}
