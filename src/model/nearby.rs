use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::partner_unit::PartnerUnitDto;

/// Result of a nearby partner unit lookup for a city.
///
/// `found` is `false` when no active partner unit exists in any candidate city, in
/// which case `message` explains the outcome and `results` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyUnitsDto {
    /// Name of the queried city.
    pub city: String,
    /// State abbreviation of the queried city.
    pub state: String,
    pub found: bool,
    pub message: Option<String>,
    pub results: Vec<NearbyCityUnitsDto>,
}

/// Active partner units of one of the nearest cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyCityUnitsDto {
    pub city_id: i32,
    pub city: String,
    pub state: String,
    /// Great-circle distance from the queried city, rounded to one decimal.
    pub distance_km: f64,
    pub units: Vec<PartnerUnitDto>,
}
