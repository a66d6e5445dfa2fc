//! City data repository for database operations.
//!
//! Cities are read together with their state because every consumer needs the state
//! abbreviation for display.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::geo::{City, CityWithState, State};

/// Repository providing read access to cities.
pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    /// Creates a new CityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a city by ID together with its state.
    ///
    /// A city whose state row is missing is treated as not found.
    ///
    /// # Arguments
    /// - `id` - ID of the city
    ///
    /// # Returns
    /// - `Ok(Some(CityWithState))` - City and its state
    /// - `Ok(None)` - No city with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_state(&self, id: i32) -> Result<Option<CityWithState>, DbErr> {
        let result = entity::prelude::City::find_by_id(id)
            .find_also_related(entity::prelude::State)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(city, state)| {
            state.map(|state| CityWithState {
                city: City::from_entity(city),
                state: State::from_entity(state),
            })
        }))
    }

    /// Gets all cities of a state ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `state_id` - ID of the state
    ///
    /// # Returns
    /// - `Ok(Vec<City>)` - Cities of the state (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_state_id(&self, state_id: i32) -> Result<Vec<City>, DbErr> {
        let entities = entity::prelude::City::find()
            .filter(entity::city::Column::StateId.eq(state_id))
            .order_by_asc(entity::city::Column::Name)
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(City::from_entity).collect())
    }

    /// Checks whether a city with the given ID exists.
    ///
    /// # Returns
    /// - `Ok(true)` - City exists
    /// - `Ok(false)` - No city with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::City::find()
            .filter(entity::city::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
