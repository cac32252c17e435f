use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{band::MemberRole, rehearsal::AttendanceStatus};

/// Change event broadcast to every socket that joined the band's room.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BandEventDto {
    BandUpdated {
        name: String,
    },
    BandDeleted,
    MemberAdded {
        user_id: i32,
        role: MemberRole,
    },
    MemberUpdated {
        user_id: i32,
        role: MemberRole,
    },
    MemberRemoved {
        user_id: i32,
    },
    RehearsalCreated {
        rehearsal_id: i32,
        title: String,
        start_time: DateTime<Utc>,
    },
    RehearsalUpdated {
        rehearsal_id: i32,
        title: String,
        start_time: DateTime<Utc>,
    },
    RehearsalDeleted {
        rehearsal_id: i32,
    },
    AttendanceUpdated {
        rehearsal_id: i32,
        user_id: i32,
        status: AttendanceStatus,
    },
    SetlistCreated {
        setlist_id: i32,
        name: String,
    },
    SetlistUpdated {
        setlist_id: i32,
        name: String,
    },
    SetlistDeleted {
        setlist_id: i32,
    },
    RehearsalReminder {
        rehearsal_id: i32,
        title: String,
        start_time: DateTime<Utc>,
        location: Option<String>,
    },
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct NotificationDto {
    pub band_id: i32,
    pub event: BandEventDto,
}

/// Frames a socket client may send.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SocketClientMessage {
    Join { band_id: i32 },
    Leave { band_id: i32 },
}

/// Frames the server sends over a socket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SocketServerMessage {
    Joined { band_id: i32 },
    Left { band_id: i32 },
    Notification { band_id: i32, event: BandEventDto },
    Error { message: String },
}

impl From<NotificationDto> for SocketServerMessage {
    fn from(notification: NotificationDto) -> Self {
        Self::Notification {
            band_id: notification.band_id,
            event: notification.event,
        }
    }
}
