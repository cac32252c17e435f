//! Band and membership domain models and parameters.
//!
//! Provides domain models for bands, their members and the caller's band list, along
//! with parameter types for band and membership mutations. Member roles are stored as
//! strings and parsed back into `MemberRole` at the repository boundary.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::band::{
        AddMemberDto, BandDto, BandMemberDto, BandSummaryDto, CreateBandDto, MemberRole,
        UpdateBandDto, UpdateMemberDto,
    },
    server::{
        error::AppError,
        util::{
            parse::parse_stored,
            validate::{self, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_URL_LENGTH},
        },
    },
};

impl MemberRole {
    /// Value stored in the `band_member.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Substitute => "substitute",
        }
    }

    /// Whether the role may create, edit and delete setlists.
    pub fn can_edit_setlists(&self) -> bool {
        matches!(self, Self::Admin | Self::Member)
    }
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "substitute" => Ok(Self::Substitute),
            other => Err(format!("Unknown member role '{}'", other)),
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member of a band joined with the member's user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMember {
    /// Membership row ID.
    pub id: i32,
    pub band_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub role: MemberRole,
    pub instrument: String,
    pub joined_at: DateTime<Utc>,
}

impl BandMember {
    /// Converts a membership row and its user into a domain model.
    ///
    /// # Arguments
    /// - `entity` - Membership row
    /// - `user` - The member's user row, as loaded by `find_also_related`
    ///
    /// # Returns
    /// - `Ok(BandMember)` - Converted member
    /// - `Err(DbErr::Custom)` - Unknown stored role
    /// - `Err(DbErr::RecordNotFound)` - Membership references a missing user
    pub fn from_entity(
        entity: entity::band_member::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let user = user.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "User {} of band member {} not found",
                entity.user_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            band_id: entity.band_id,
            user_id: entity.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            role: parse_stored("member role", &entity.role)?,
            instrument: entity.instrument,
            joined_at: entity.joined_at,
        })
    }

    pub fn into_dto(self) -> BandMemberDto {
        BandMemberDto {
            id: self.id,
            band_id: self.band_id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image_url: self.profile_image_url,
            role: self.role,
            instrument: self.instrument,
            joined_at: self.joined_at,
        }
    }
}

/// Band with its members ordered by join date.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    /// User who created the band.
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub members: Vec<BandMember>,
}

impl Band {
    pub fn from_entity(entity: entity::band::Model, members: Vec<BandMember>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            logo_url: entity.logo_url,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            members,
        }
    }

    pub fn into_dto(self) -> BandDto {
        BandDto {
            id: self.id,
            name: self.name,
            description: self.description,
            logo_url: self.logo_url,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
            members: self.members.into_iter().map(BandMember::into_dto).collect(),
        }
    }
}

/// Band as it appears in a user's band list.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    /// Role of the listing user within the band.
    pub role: MemberRole,
    pub member_count: u64,
}

impl BandSummary {
    /// Converts a band row, the listing user's membership and the band's member count.
    ///
    /// # Returns
    /// - `Ok(BandSummary)` - Converted summary
    /// - `Err(DbErr::Custom)` - Unknown stored role
    pub fn from_entity(
        band: entity::band::Model,
        membership: &entity::band_member::Model,
        member_count: u64,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: band.id,
            name: band.name,
            description: band.description,
            logo_url: band.logo_url,
            role: parse_stored("member role", &membership.role)?,
            member_count,
        })
    }

    pub fn into_dto(self) -> BandSummaryDto {
        BandSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            logo_url: self.logo_url,
            role: self.role,
            member_count: self.member_count,
        }
    }
}

/// Parameters for creating a band with its creator as the first admin.
#[derive(Debug, Clone)]
pub struct CreateBandParams {
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    /// Instrument the creator plays.
    pub instrument: String,
    pub created_by: i32,
}

impl CreateBandParams {
    /// Validates a create band DTO on behalf of `created_by`.
    pub fn from_dto(created_by: i32, dto: CreateBandDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::required_text("Band name", &dto.name, MAX_NAME_LENGTH)?,
            description: validate::bounded_text(
                "Description",
                &dto.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            logo_url: validate::optional_text("Logo URL", dto.logo_url, MAX_URL_LENGTH)?,
            instrument: validate::bounded_text("Instrument", &dto.instrument, MAX_NAME_LENGTH)?,
            created_by,
        })
    }
}

/// Full replacement of a band's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateBandParams {
    pub band_id: i32,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
}

impl UpdateBandParams {
    pub fn from_dto(band_id: i32, dto: UpdateBandDto) -> Result<Self, AppError> {
        Ok(Self {
            band_id,
            name: validate::required_text("Band name", &dto.name, MAX_NAME_LENGTH)?,
            description: validate::bounded_text(
                "Description",
                &dto.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            logo_url: validate::optional_text("Logo URL", dto.logo_url, MAX_URL_LENGTH)?,
        })
    }
}

/// Parameters for adding an existing user to a band by email.
#[derive(Debug, Clone)]
pub struct AddMemberParams {
    pub band_id: i32,
    /// Lowercased email of the user to add.
    pub email: String,
    pub role: MemberRole,
    pub instrument: String,
}

impl AddMemberParams {
    pub fn from_dto(band_id: i32, dto: AddMemberDto) -> Result<Self, AppError> {
        Ok(Self {
            band_id,
            email: validate::email(&dto.email)?,
            role: dto.role,
            instrument: validate::bounded_text("Instrument", &dto.instrument, MAX_NAME_LENGTH)?,
        })
    }
}

/// Parameters for inserting a membership row.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub band_id: i32,
    pub user_id: i32,
    pub role: MemberRole,
    pub instrument: String,
}

/// Replacement of a member's role and instrument.
#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub band_id: i32,
    pub user_id: i32,
    pub role: MemberRole,
    pub instrument: String,
}

impl UpdateMemberParams {
    pub fn from_dto(band_id: i32, user_id: i32, dto: UpdateMemberDto) -> Result<Self, AppError> {
        Ok(Self {
            band_id,
            user_id,
            role: dto.role,
            instrument: validate::bounded_text("Instrument", &dto.instrument, MAX_NAME_LENGTH)?,
        })
    }
}
