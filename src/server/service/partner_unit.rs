//! Partner unit service for business logic.
//!
//! This module provides the `PartnerUnitService` for managing partner units. It validates
//! input, checks that referenced cities exist and maps missing records to `NotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, partner_unit::PartnerUnitRepository},
    error::AppError,
    model::partner_unit::{
        CreatePartnerUnitParam, GetPaginatedPartnerUnitsParam, PaginatedPartnerUnits,
        PartnerUnit, UpdatePartnerUnitParam,
    },
};

/// Largest page size accepted when listing units.
pub const MAX_PER_PAGE: u64 = 100;

/// Service providing business logic for partner unit management.
pub struct PartnerUnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerUnitService<'a> {
    /// Creates a new PartnerUnitService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a partner unit in an existing city.
    ///
    /// Name and address are trimmed; blank optional text fields are stored as `None`.
    ///
    /// # Arguments
    /// - `param` - Unit fields including the owning city
    ///
    /// # Returns
    /// - `Ok(PartnerUnit)` - The created unit
    /// - `Err(AppError::BadRequest)` - Blank name or address, or invalid price
    /// - `Err(AppError::NotFound)` - City does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePartnerUnitParam) -> Result<PartnerUnit, AppError> {
        let param = CreatePartnerUnitParam {
            name: param.name.trim().to_string(),
            address: param.address.trim().to_string(),
            phone: normalize_optional(param.phone),
            responsible: normalize_optional(param.responsible),
            notes: normalize_optional(param.notes),
            ..param
        };

        validate_fields(&param.name, &param.address, param.price)?;
        self.require_city(param.city_id).await?;

        let unit = PartnerUnitRepository::new(self.db).create(param).await?;

        tracing::info!("Created partner unit {} in city {}", unit.id, unit.city_id);

        Ok(unit)
    }

    /// Gets a partner unit by ID.
    ///
    /// # Returns
    /// - `Ok(PartnerUnit)` - Unit found
    /// - `Err(AppError::NotFound)` - Unit does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i32) -> Result<PartnerUnit, AppError> {
        PartnerUnitRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(unit_not_found)
    }

    /// Replaces the mutable fields of a partner unit.
    ///
    /// Setting `active` to `false` removes the unit from nearby resolution.
    ///
    /// # Arguments
    /// - `param` - ID of the unit and its new field values
    ///
    /// # Returns
    /// - `Ok(PartnerUnit)` - The updated unit
    /// - `Err(AppError::BadRequest)` - Blank name or address, or invalid price
    /// - `Err(AppError::NotFound)` - Unit or target city does not exist
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, param: UpdatePartnerUnitParam) -> Result<PartnerUnit, AppError> {
        let param = UpdatePartnerUnitParam {
            name: param.name.trim().to_string(),
            address: param.address.trim().to_string(),
            phone: normalize_optional(param.phone),
            responsible: normalize_optional(param.responsible),
            notes: normalize_optional(param.notes),
            ..param
        };

        validate_fields(&param.name, &param.address, param.price)?;
        self.require_city(param.city_id).await?;

        let id = param.id;
        let unit = PartnerUnitRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(unit_not_found)?;

        tracing::info!("Updated partner unit {}", id);

        Ok(unit)
    }

    /// Deletes a partner unit.
    ///
    /// # Returns
    /// - `Ok(())` - Unit deleted
    /// - `Err(AppError::NotFound)` - Unit does not exist
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PartnerUnitRepository::new(self.db).delete(id).await? {
            return Err(unit_not_found());
        }

        tracing::info!("Deleted partner unit {}", id);

        Ok(())
    }

    /// Lists the partner units of a city one page at a time.
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`. Pages whose row offset does not fit in
    /// an SQL `BIGINT` are rejected.
    ///
    /// # Arguments
    /// - `param` - City ID, zero-indexed page and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedPartnerUnits)` - Units for the page with pagination metadata
    /// - `Err(AppError::BadRequest)` - Page number out of range
    /// - `Err(AppError::NotFound)` - City does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_by_city(
        &self,
        param: GetPaginatedPartnerUnitsParam,
    ) -> Result<PaginatedPartnerUnits, AppError> {
        let per_page = param.per_page.clamp(1, MAX_PER_PAGE);

        let offset = param.page.checked_mul(per_page);
        if !offset.is_some_and(|offset| offset <= i64::MAX as u64) {
            return Err(AppError::BadRequest("Page is out of range".to_string()));
        }

        self.require_city(param.city_id).await?;

        let (units, total) = PartnerUnitRepository::new(self.db)
            .get_by_city_paginated(param.city_id, param.page, per_page)
            .await?;

        Ok(PaginatedPartnerUnits {
            units,
            total,
            page: param.page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    async fn require_city(&self, city_id: i32) -> Result<(), AppError> {
        if !CityRepository::new(self.db).exists(city_id).await? {
            return Err(AppError::NotFound("City not found".to_string()));
        }

        Ok(())
    }
}

fn unit_not_found() -> AppError {
    AppError::NotFound("Partner unit not found".to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_fields(name: &str, address: &str, price: Option<f64>) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    if address.is_empty() {
        return Err(AppError::BadRequest("Address is required".to_string()));
    }

    if let Some(price) = price {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::BadRequest(
                "Price must be a non-negative number".to_string(),
            ));
        }
    }

    Ok(())
}
