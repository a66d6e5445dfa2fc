//! State factory for creating test state entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test states with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let state = StateFactory::new(&db)
///     .name("São Paulo")
///     .abbreviation("SP")
///     .build()
///     .await?;
/// ```
pub struct StateFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    abbreviation: String,
}

impl<'a> StateFactory<'a> {
    /// Creates a new StateFactory with default values.
    ///
    /// Defaults:
    /// - name: `"State {id}"`
    /// - abbreviation: `"S{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("State {}", id),
            abbreviation: format!("S{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    /// Builds and inserts the state entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::state::Model)` - Created state entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::state::Model, DbErr> {
        entity::state::ActiveModel {
            name: ActiveValue::Set(self.name),
            abbreviation: ActiveValue::Set(self.abbreviation),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a state with default values.
///
/// Shorthand for `StateFactory::new(db).build().await`.
pub async fn create_state(db: &DatabaseConnection) -> Result<entity::state::Model, DbErr> {
    StateFactory::new(db).build().await
}
