use std::str::FromStr;

use sea_orm::DbErr;

use crate::server::error::internal::InternalError;

/// Parses an enum value stored as a string column.
///
/// Stored roles and statuses are written by the application itself, so a value that
/// fails to parse indicates a corrupt row rather than bad user input. The failure is
/// reported as a `DbErr` so it can be raised from entity conversions at the repository
/// boundary.
///
/// # Arguments
/// - `kind` - Human readable name of the value, used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(DbErr::Custom)` - Unknown stored value, carrying `InternalError::ParseStoredValue`
pub fn parse_stored<T: FromStr>(kind: &'static str, value: &str) -> Result<T, DbErr> {
    value.parse::<T>().map_err(|_| {
        DbErr::Custom(
            InternalError::ParseStoredValue {
                kind,
                value: value.to_string(),
            }
            .to_string(),
        )
    })
}
