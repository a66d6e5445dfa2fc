//! Partner unit factory for creating test partner unit entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test partner units with customizable fields.
///
/// Requires the owning city to already exist.
///
/// # Example
///
/// ```rust,ignore
/// let unit = PartnerUnitFactory::new(&db, city.id)
///     .name("Unit Centro")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct PartnerUnitFactory<'a> {
    db: &'a DatabaseConnection,
    city_id: i32,
    name: String,
    address: String,
    phone: Option<String>,
    responsible: Option<String>,
    price: Option<f64>,
    notes: Option<String>,
    active: bool,
}

impl<'a> PartnerUnitFactory<'a> {
    /// Creates a new PartnerUnitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Unit {id}"`
    /// - address: `"Street {id}"`
    /// - phone, responsible, price, notes: `None`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `city_id` - ID of the city the unit belongs to
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            city_id,
            name: format!("Unit {}", id),
            address: format!("Street {}", id),
            phone: None,
            responsible: None,
            price: None,
            notes: None,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn responsible(mut self, responsible: Option<String>) -> Self {
        self.responsible = responsible;
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the partner unit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::partner_unit::Model)` - Created partner unit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::partner_unit::Model, DbErr> {
        let now = Utc::now();

        entity::partner_unit::ActiveModel {
            city_id: ActiveValue::Set(self.city_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            responsible: ActiveValue::Set(self.responsible),
            price: ActiveValue::Set(self.price),
            notes: ActiveValue::Set(self.notes),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active partner unit with default values in the given city.
pub async fn create_partner_unit(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::partner_unit::Model, DbErr> {
    PartnerUnitFactory::new(db, city_id).build().await
}
