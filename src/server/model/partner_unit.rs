//! Partner unit domain models and parameters.
//!
//! Provides the partner unit model, its join with the owning city used by nearby
//! resolution, and the parameter types for create, update and paginated listing.

use chrono::{DateTime, Utc};

use crate::{
    model::partner_unit::{
        CreatePartnerUnitDto, PaginatedPartnerUnitsDto, PartnerUnitDto, UpdatePartnerUnitDto,
    },
    server::model::geo::City,
};

/// Physical service location attached to exactly one city.
///
/// Inactive units are kept for management but never returned by nearby resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerUnit {
    pub id: i32,
    pub city_id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    /// Name of the person responsible for the unit.
    pub responsible: Option<String>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerUnit {
    pub fn into_dto(self) -> PartnerUnitDto {
        PartnerUnitDto {
            id: self.id,
            city_id: self.city_id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            responsible: self.responsible,
            price: self.price,
            notes: self.notes,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a partner unit domain model at the repository boundary.
    pub fn from_entity(entity: entity::partner_unit::Model) -> Self {
        Self {
            id: entity.id,
            city_id: entity.city_id,
            name: entity.name,
            address: entity.address,
            phone: entity.phone,
            responsible: entity.responsible,
            price: entity.price,
            notes: entity.notes,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Partner unit joined with its owning city and the city's state abbreviation.
///
/// This is the candidate row consumed by nearby resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerUnitWithCity {
    pub unit: PartnerUnit,
    pub city: City,
    pub state_abbreviation: String,
}

/// Parameters for creating a partner unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePartnerUnitParam {
    pub city_id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub responsible: Option<String>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub active: bool,
}

impl CreatePartnerUnitParam {
    /// Converts the request DTO, defaulting `active` to `true`.
    pub fn from_dto(dto: CreatePartnerUnitDto) -> Self {
        Self {
            city_id: dto.city_id,
            name: dto.name,
            address: dto.address,
            phone: dto.phone,
            responsible: dto.responsible,
            price: dto.price,
            notes: dto.notes,
            active: dto.active.unwrap_or(true),
        }
    }
}

/// Parameters for replacing the mutable fields of a partner unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePartnerUnitParam {
    pub id: i32,
    pub city_id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub responsible: Option<String>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub active: bool,
}

impl UpdatePartnerUnitParam {
    pub fn from_dto(id: i32, dto: UpdatePartnerUnitDto) -> Self {
        Self {
            id,
            city_id: dto.city_id,
            name: dto.name,
            address: dto.address,
            phone: dto.phone,
            responsible: dto.responsible,
            price: dto.price,
            notes: dto.notes,
            active: dto.active,
        }
    }
}

/// Parameters for listing the partner units of a city one page at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPaginatedPartnerUnitsParam {
    pub city_id: i32,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Page of partner units with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPartnerUnits {
    pub units: Vec<PartnerUnit>,
    /// Total number of units across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPartnerUnits {
    pub fn into_dto(self) -> PaginatedPartnerUnitsDto {
        PaginatedPartnerUnitsDto {
            units: self.units.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
