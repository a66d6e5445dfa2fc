//! Nearby partner unit resolution results.

use crate::{
    model::nearby::{NearbyCityUnitsDto, NearbyUnitsDto},
    server::model::{geo::CityWithState, partner_unit::PartnerUnit},
};

/// Active partner units of one selected city together with its distance from the
/// queried city.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyCityUnits {
    pub city_id: i32,
    pub city_name: String,
    pub state_abbreviation: String,
    /// Kilometers, rounded to one decimal.
    pub distance_km: f64,
    /// Ordered by distance, then name.
    pub units: Vec<PartnerUnit>,
}

impl NearbyCityUnits {
    pub fn into_dto(self) -> NearbyCityUnitsDto {
        NearbyCityUnitsDto {
            city_id: self.city_id,
            city: self.city_name,
            state: self.state_abbreviation,
            distance_km: self.distance_km,
            units: self.units.into_iter().map(|u| u.into_dto()).collect(),
        }
    }
}

/// Outcome of resolving the nearest partner units for a city.
///
/// `Empty` is a successful outcome distinct from the queried city not existing, which is
/// reported as an error instead.
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyUnits {
    /// Units of at most the nearest cities, ordered by distance.
    Found {
        origin: CityWithState,
        groups: Vec<NearbyCityUnits>,
    },
    /// No active partner unit exists in any candidate city.
    Empty {
        origin: CityWithState,
        message: String,
    },
}

impl NearbyUnits {
    pub fn into_dto(self) -> NearbyUnitsDto {
        match self {
            Self::Found { origin, groups } => NearbyUnitsDto {
                city: origin.city.name,
                state: origin.state.abbreviation,
                found: true,
                message: None,
                results: groups.into_iter().map(|g| g.into_dto()).collect(),
            },
            Self::Empty { origin, message } => NearbyUnitsDto {
                city: origin.city.name,
                state: origin.state.abbreviation,
                found: false,
                message: Some(message),
                results: Vec::new(),
            },
        }
    }
}
