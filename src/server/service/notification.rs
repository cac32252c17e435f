//! Per-band change notifications.
//!
//! Every mutation publishes a [`NotificationDto`] onto one process-wide broadcast
//! channel. Each socket subscribes to that channel and forwards only the
//! notifications for bands it has joined, tracked by [`BandRooms`].

use std::{collections::HashSet, sync::Arc};

use tokio::sync::broadcast;

use crate::model::notification::{BandEventDto, NotificationDto};

/// Number of notifications buffered per subscriber before it starts lagging.
pub const NOTIFICATION_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<Arc<NotificationDto>>,
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAPACITY)
    }
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to the band's room.
    ///
    /// # Returns
    /// The number of subscribers the notification reached. Zero when nobody is
    /// connected, which is not an error.
    pub fn publish(&self, band_id: i32, event: BandEventDto) -> usize {
        let notification = Arc::new(NotificationDto { band_id, event });

        match self.sender.send(notification) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!(band_id, "No subscribers for band notification");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<NotificationDto>> {
        self.sender.subscribe()
    }
}

/// The bands a single socket connection has joined.
#[derive(Debug, Default)]
pub struct BandRooms {
    user_id: i32,
    bands: HashSet<i32>,
}

impl BandRooms {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            bands: HashSet::new(),
        }
    }

    pub fn join(&mut self, band_id: i32) {
        self.bands.insert(band_id);
    }

    /// Returns false if the band wasn't joined
    pub fn leave(&mut self, band_id: i32) -> bool {
        self.bands.remove(&band_id)
    }

    pub fn contains(&self, band_id: i32) -> bool {
        self.bands.contains(&band_id)
    }

    /// Filters a notification for this connection.
    ///
    /// Returns true if the notification should be forwarded. Leaves the band's room
    /// when the band is deleted or the connection's user is removed from it, after
    /// that final notification is forwarded.
    pub fn apply(&mut self, notification: &NotificationDto) -> bool {
        if !self.contains(notification.band_id) {
            return false;
        }

        let leaves_room = match &notification.event {
            BandEventDto::BandDeleted => true,
            BandEventDto::MemberRemoved { user_id } => *user_id == self.user_id,
            _ => false,
        };

        if leaves_room {
            self.leave(notification.band_id);
        }

        true
    }
}
