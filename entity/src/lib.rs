//! SeaORM entity models for the rehearsal scheduler.
//!
//! One module per table. The `migration` crate owns the production schema; these
//! models mirror it and are also used by `test-utils` to create in-memory tables.

pub mod prelude;

pub mod band;
pub mod band_member;
pub mod rehearsal;
pub mod rehearsal_attendance;
pub mod setlist;
pub mod setlist_song;
pub mod user;
