//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
///
/// Requires the owning state to already exist.
///
/// # Example
///
/// ```rust,ignore
/// let city = CityFactory::new(&db, state.id)
///     .name("Santos")
///     .coordinates(-23.96, -46.33)
///     .build()
///     .await?;
/// ```
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    state_id: i32,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"City {id}"`
    /// - latitude: `-23.55`
    /// - longitude: `-46.63`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `state_id` - ID of the state the city belongs to
    pub fn new(db: &'a DatabaseConnection, state_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            state_id,
            name: format!("City {}", id),
            latitude: -23.55,
            longitude: -46.63,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the city coordinates in degrees.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds and inserts the city entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            state_id: ActiveValue::Set(self.state_id),
            name: ActiveValue::Set(self.name),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values in the given state.
pub async fn create_city(
    db: &DatabaseConnection,
    state_id: i32,
) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db, state_id).build().await
}
