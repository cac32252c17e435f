//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails and names
/// across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a band together with its creating user as an `admin` member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, band, membership))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_band_with_admin(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::band::Model,
        entity::band_member::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let band = crate::factory::band::create_band(db, user.id).await?;
    let membership = crate::factory::band_member::BandMemberFactory::new(db, band.id, user.id)
        .role("admin")
        .build()
        .await?;

    Ok((user, band, membership))
}

/// Creates a new user and adds them to an existing band with the given role.
///
/// # Arguments
/// - `db` - Database connection
/// - `band_id` - Band to join
/// - `role` - Membership role (`admin`, `member` or `substitute`)
///
/// # Returns
/// - `Ok((user, membership))` - Created user and membership
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_in_band(
    db: &DatabaseConnection,
    band_id: i32,
    role: &str,
) -> Result<(entity::user::Model, entity::band_member::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let membership = crate::factory::band_member::BandMemberFactory::new(db, band_id, user.id)
        .role(role)
        .build()
        .await?;

    Ok((user, membership))
}
