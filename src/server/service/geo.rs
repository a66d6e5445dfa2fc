//! Reference data lookup service.
//!
//! Provides read-only access to states and cities for clients that need to pick a city
//! before asking for nearby partner units.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, state::StateRepository},
    error::AppError,
    model::geo::{City, CityWithState, State},
};

/// Service providing state and city lookups.
pub struct GeoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeoService<'a> {
    /// Creates a new GeoService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all states ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<State>)` - All states
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_states(&self) -> Result<Vec<State>, AppError> {
        let states = StateRepository::new(self.db).get_all().await?;

        Ok(states)
    }

    /// Lists the cities of a state ordered by name.
    ///
    /// # Arguments
    /// - `state_id` - ID of the state
    ///
    /// # Returns
    /// - `Ok(Vec<City>)` - Cities of the state
    /// - `Err(AppError::NotFound)` - State does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_cities_by_state(&self, state_id: i32) -> Result<Vec<City>, AppError> {
        if StateRepository::new(self.db)
            .find_by_id(state_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("State not found".to_string()));
        }

        let cities = CityRepository::new(self.db).get_by_state_id(state_id).await?;

        Ok(cities)
    }

    /// Gets a city together with its state.
    ///
    /// # Arguments
    /// - `city_id` - ID of the city
    ///
    /// # Returns
    /// - `Ok(CityWithState)` - City and its state
    /// - `Err(AppError::NotFound)` - City does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_city(&self, city_id: i32) -> Result<CityWithState, AppError> {
        CityRepository::new(self.db)
            .find_with_state(city_id)
            .await?
            .ok_or_else(|| AppError::NotFound("City not found".to_string()))
    }
}
