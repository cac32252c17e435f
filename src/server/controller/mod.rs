//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts the request DTO into
//! validated params, calls a service, publishes a band notification after a successful
//! mutation and converts the domain model back into a response DTO.

pub mod auth;
pub mod band;
pub mod health;
pub mod member;
pub mod rehearsal;
pub mod setlist;
pub mod socket;
pub mod user;
