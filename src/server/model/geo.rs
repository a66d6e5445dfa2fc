//! State and city domain models.
//!
//! States and cities are immutable reference data. Cities carry the coordinates used to
//! compute great-circle distances between partner units.

use crate::{
    model::geo::{CityDto, CitySummaryDto, StateDto},
    server::util::geo::Coordinates,
};

/// Federative unit that groups cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: i32,
    pub name: String,
    /// Short code such as `SP` or `RJ`.
    pub abbreviation: String,
}

impl State {
    pub fn into_dto(self) -> StateDto {
        StateDto {
            id: self.id,
            name: self.name,
            abbreviation: self.abbreviation,
        }
    }

    /// Converts an entity model to a state domain model at the repository boundary.
    pub fn from_entity(entity: entity::state::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            abbreviation: entity.abbreviation,
        }
    }
}

/// City with its geographic coordinates in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub state_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn into_summary_dto(self) -> CitySummaryDto {
        CitySummaryDto {
            id: self.id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Converts an entity model to a city domain model at the repository boundary.
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            state_id: entity.state_id,
            name: entity.name,
            latitude: entity.latitude,
            longitude: entity.longitude,
        }
    }
}

/// City joined with the state it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CityWithState {
    pub city: City,
    pub state: State,
}

impl CityWithState {
    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.city.id,
            name: self.city.name,
            latitude: self.city.latitude,
            longitude: self.city.longitude,
            state: self.state.into_dto(),
        }
    }
}
