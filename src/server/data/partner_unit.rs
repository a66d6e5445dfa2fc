//! Partner unit data repository for database operations.
//!
//! This module provides the `PartnerUnitRepository` for managing partner unit records and
//! for loading the active units, joined with their city and state, that nearby resolution
//! ranks by distance.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    geo::City,
    partner_unit::{
        CreatePartnerUnitParam, PartnerUnit, PartnerUnitWithCity, UpdatePartnerUnitParam,
    },
};

/// Repository providing database operations for partner units.
pub struct PartnerUnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerUnitRepository<'a> {
    /// Creates a new PartnerUnitRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new partner unit.
    ///
    /// Sets both `created_at` and `updated_at` to the current UTC time.
    ///
    /// # Arguments
    /// - `param` - Unit fields including the owning city
    ///
    /// # Returns
    /// - `Ok(PartnerUnit)` - The created unit
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePartnerUnitParam) -> Result<PartnerUnit, DbErr> {
        let now = Utc::now();

        let entity = entity::partner_unit::ActiveModel {
            city_id: ActiveValue::Set(param.city_id),
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            phone: ActiveValue::Set(param.phone),
            responsible: ActiveValue::Set(param.responsible),
            price: ActiveValue::Set(param.price),
            notes: ActiveValue::Set(param.notes),
            active: ActiveValue::Set(param.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PartnerUnit::from_entity(entity))
    }

    /// Finds a partner unit by ID.
    ///
    /// # Returns
    /// - `Ok(Some(PartnerUnit))` - Unit found
    /// - `Ok(None)` - No unit with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<PartnerUnit>, DbErr> {
        let entity = entity::prelude::PartnerUnit::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PartnerUnit::from_entity))
    }

    /// Replaces the mutable fields of a partner unit.
    ///
    /// Keeps `created_at` and refreshes `updated_at`.
    ///
    /// # Arguments
    /// - `param` - ID of the unit and its new field values
    ///
    /// # Returns
    /// - `Ok(Some(PartnerUnit))` - The updated unit
    /// - `Ok(None)` - No unit with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdatePartnerUnitParam) -> Result<Option<PartnerUnit>, DbErr> {
        let Some(existing) = entity::prelude::PartnerUnit::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::partner_unit::ActiveModel = existing.into();
        active_model.city_id = ActiveValue::Set(param.city_id);
        active_model.name = ActiveValue::Set(param.name);
        active_model.address = ActiveValue::Set(param.address);
        active_model.phone = ActiveValue::Set(param.phone);
        active_model.responsible = ActiveValue::Set(param.responsible);
        active_model.price = ActiveValue::Set(param.price);
        active_model.notes = ActiveValue::Set(param.notes);
        active_model.active = ActiveValue::Set(param.active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(PartnerUnit::from_entity(entity)))
    }

    /// Deletes a partner unit.
    ///
    /// # Returns
    /// - `Ok(true)` - Unit deleted
    /// - `Ok(false)` - No unit with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PartnerUnit::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of a city's partner units ordered by name.
    ///
    /// Includes inactive units.
    ///
    /// # Arguments
    /// - `city_id` - ID of the owning city
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of units per page
    ///
    /// # Returns
    /// - `Ok((units, total))` - Units for the page and the total number of units in the city
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_city_paginated(
        &self,
        city_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PartnerUnit>, u64), DbErr> {
        let paginator = entity::prelude::PartnerUnit::find()
            .filter(entity::partner_unit::Column::CityId.eq(city_id))
            .order_by_asc(entity::partner_unit::Column::Name)
            .order_by_asc(entity::partner_unit::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let units = entities.into_iter().map(PartnerUnit::from_entity).collect();

        Ok((units, total))
    }

    /// Gets every active partner unit with its owning city and state abbreviation.
    ///
    /// Performs one query for units joined with cities and one query for the states of
    /// those cities. Units whose city or state row is missing are skipped since they
    /// cannot be positioned.
    ///
    /// # Returns
    /// - `Ok(Vec<PartnerUnitWithCity>)` - All active units (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_with_city(&self) -> Result<Vec<PartnerUnitWithCity>, DbErr> {
        let rows = entity::prelude::PartnerUnit::find()
            .filter(entity::partner_unit::Column::Active.eq(true))
            .find_also_related(entity::prelude::City)
            .all(self.db)
            .await?;

        let mut state_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, city)| city.as_ref().map(|c| c.state_id))
            .collect();
        state_ids.sort_unstable();
        state_ids.dedup();

        let abbreviations: HashMap<i32, String> = if !state_ids.is_empty() {
            entity::prelude::State::find()
                .filter(entity::state::Column::Id.is_in(state_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s.abbreviation))
                .collect()
        } else {
            HashMap::new()
        };

        let units = rows
            .into_iter()
            .filter_map(|(unit, city)| {
                let city = city?;
                let state_abbreviation = abbreviations.get(&city.state_id)?.clone();

                Some(PartnerUnitWithCity {
                    unit: PartnerUnit::from_entity(unit),
                    city: City::from_entity(city),
                    state_abbreviation,
                })
            })
            .collect();

        Ok(units)
    }
}
