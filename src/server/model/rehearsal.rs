//! Rehearsal and attendance domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::rehearsal::{
        AttendanceDto, AttendanceStatus, CreateRehearsalDto, RehearsalDto, SetAttendanceDto,
        UpdateRehearsalDto,
    },
    server::{
        error::AppError,
        util::{
            parse::parse_stored,
            validate::{self, MAX_DESCRIPTION_LENGTH, MAX_SHORT_TEXT_LENGTH, MAX_TITLE_LENGTH},
        },
    },
};

impl AttendanceStatus {
    /// Value stored in the `rehearsal_attendance.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Going => "going",
            Self::Maybe => "maybe",
            Self::NotGoing => "not_going",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "going" => Ok(Self::Going),
            "maybe" => Ok(Self::Maybe),
            "not_going" => Ok(Self::NotGoing),
            other => Err(format!("Unknown attendance status '{}'", other)),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member's answer to a rehearsal.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub rehearsal_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub status: AttendanceStatus,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    /// Converts an attendance row and the answering user.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Converted attendance
    /// - `Err(DbErr::Custom)` - Unknown stored status
    /// - `Err(DbErr::RecordNotFound)` - Attendance references a missing user
    pub fn from_entity(
        entity: entity::rehearsal_attendance::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let user = user.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "User {} of attendance {} not found",
                entity.user_id, entity.id
            ))
        })?;

        Ok(Self {
            rehearsal_id: entity.rehearsal_id,
            user_id: entity.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            status: parse_stored("attendance status", &entity.status)?,
            note: entity.note,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            status: self.status,
            note: self.note,
            updated_at: self.updated_at,
        }
    }
}

/// Scheduled rehearsal of a band.
#[derive(Debug, Clone, PartialEq)]
pub struct Rehearsal {
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub setlist_id: Option<i32>,
    pub created_by: i32,
    /// When the reminder notification went out; reset when the start time moves.
    pub reminder_sent_at: Option<DateTime<Utc>>,
    /// Attendance answers ordered by the answering user's ID.
    pub attendance: Vec<Attendance>,
}

impl Rehearsal {
    pub fn from_entity(entity: entity::rehearsal::Model, attendance: Vec<Attendance>) -> Self {
        Self {
            id: entity.id,
            band_id: entity.band_id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            start_time: entity.start_time,
            end_time: entity.end_time,
            setlist_id: entity.setlist_id,
            created_by: entity.created_by,
            reminder_sent_at: entity.reminder_sent_at,
            attendance,
        }
    }

    pub fn into_dto(self) -> RehearsalDto {
        RehearsalDto {
            id: self.id,
            band_id: self.band_id,
            title: self.title,
            description: self.description,
            location: self.location,
            start_time: self.start_time,
            end_time: self.end_time,
            setlist_id: self.setlist_id,
            created_by: self.created_by,
            reminder_sent_at: self.reminder_sent_at,
            attendance: self
                .attendance
                .into_iter()
                .map(Attendance::into_dto)
                .collect(),
        }
    }
}

/// Validated rehearsal fields shared by create and update.
#[derive(Debug, Clone)]
pub struct RehearsalFields {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub setlist_id: Option<i32>,
}

impl RehearsalFields {
    fn validate(
        title: &str,
        description: Option<String>,
        location: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        setlist_id: Option<i32>,
    ) -> Result<Self, AppError> {
        if start_time >= end_time {
            return Err(AppError::BadRequest(
                "Rehearsal must end after it starts".to_string(),
            ));
        }

        Ok(Self {
            title: validate::required_text("Title", title, MAX_TITLE_LENGTH)?,
            description: validate::optional_text(
                "Description",
                description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            location: validate::optional_text("Location", location, MAX_SHORT_TEXT_LENGTH)?,
            start_time,
            end_time,
            setlist_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateRehearsalParams {
    pub band_id: i32,
    pub created_by: i32,
    pub fields: RehearsalFields,
}

impl CreateRehearsalParams {
    /// Validates a create rehearsal DTO on behalf of `created_by`.
    ///
    /// Whether the referenced setlist belongs to the band is checked by the service.
    pub fn from_dto(created_by: i32, dto: CreateRehearsalDto) -> Result<Self, AppError> {
        Ok(Self {
            band_id: dto.band_id,
            created_by,
            fields: RehearsalFields::validate(
                &dto.title,
                dto.description,
                dto.location,
                dto.start_time,
                dto.end_time,
                dto.setlist_id,
            )?,
        })
    }
}

/// Full replacement of a rehearsal's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateRehearsalParams {
    pub rehearsal_id: i32,
    pub fields: RehearsalFields,
}

impl UpdateRehearsalParams {
    pub fn from_dto(rehearsal_id: i32, dto: UpdateRehearsalDto) -> Result<Self, AppError> {
        Ok(Self {
            rehearsal_id,
            fields: RehearsalFields::validate(
                &dto.title,
                dto.description,
                dto.location,
                dto.start_time,
                dto.end_time,
                dto.setlist_id,
            )?,
        })
    }
}

/// A user's own attendance answer for a rehearsal.
#[derive(Debug, Clone)]
pub struct SetAttendanceParams {
    pub rehearsal_id: i32,
    pub user_id: i32,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

impl SetAttendanceParams {
    pub fn from_dto(
        rehearsal_id: i32,
        user_id: i32,
        dto: SetAttendanceDto,
    ) -> Result<Self, AppError> {
        Ok(Self {
            rehearsal_id,
            user_id,
            status: dto.status,
            note: validate::optional_text("Note", dto.note, MAX_SHORT_TEXT_LENGTH)?,
        })
    }
}

/// Filter for listing a band's rehearsals by start time in `[from, to)`.
#[derive(Debug, Clone)]
pub struct RehearsalFilter {
    pub band_id: i32,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl RehearsalFilter {
    pub fn new(
        band_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Self, AppError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "'from' must not be after 'to'".to_string(),
                ));
            }
        }

        Ok(Self { band_id, from, to })
    }
}
