//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules
//! that span more than one table (last admin protection, current band fallback,
//! setlist ownership), hash passwords, and convert repository errors into
//! [`AppError`](crate::server::error::AppError).

pub mod auth;
pub mod band;
pub mod member;
pub mod notification;
pub mod rehearsal;
pub mod setlist;
pub mod user;
