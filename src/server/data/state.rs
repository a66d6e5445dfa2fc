//! State data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::geo::State;

/// Repository providing read access to states.
pub struct StateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StateRepository<'a> {
    /// Creates a new StateRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all states ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<State>)` - All states (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<State>, DbErr> {
        let entities = entity::prelude::State::find()
            .order_by_asc(entity::state::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(State::from_entity).collect())
    }

    /// Finds a state by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(State))` - State found
    /// - `Ok(None)` - No state with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<State>, DbErr> {
        let entity = entity::prelude::State::find_by_id(id).one(self.db).await?;

        Ok(entity.map(State::from_entity))
    }
}
