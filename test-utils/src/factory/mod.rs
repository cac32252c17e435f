//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (admin, band, membership) = factory::helpers::create_band_with_admin(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("drums@example.com")
//!     .first_name("Ringo")
//!     .build()
//!     .await?;
//!
//! let member = factory::band_member::BandMemberFactory::new(&db, band.id, user.id)
//!     .role("substitute")
//!     .instrument("Drums")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `band` - Create band entities
//! - `band_member` - Create band membership entities
//! - `rehearsal` - Create rehearsal entities
//! - `setlist` - Create setlist entities, optionally with songs
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod band;
pub mod band_member;
pub mod helpers;
pub mod rehearsal;
pub mod setlist;
pub mod user;

pub use band::create_band;
pub use band_member::create_band_member;
pub use helpers::create_band_with_admin;
pub use rehearsal::create_rehearsal;
pub use setlist::create_setlist;
pub use user::create_user;
