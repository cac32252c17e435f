//! Data transfer objects shared over the HTTP and WebSocket API.
//!
//! Everything in this module is serialized to or deserialized from JSON and carries a
//! `ToSchema` derive so it shows up in the generated OpenAPI document.

pub mod api;
pub mod band;
pub mod notification;
pub mod rehearsal;
pub mod setlist;
pub mod user;
