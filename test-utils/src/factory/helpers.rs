//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a state and a city inside it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((state, city))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_city_with_state(
    db: &DatabaseConnection,
) -> Result<(entity::state::Model, entity::city::Model), DbErr> {
    let state = crate::factory::state::create_state(db).await?;
    let city = crate::factory::city::create_city(db, state.id).await?;

    Ok((state, city))
}
