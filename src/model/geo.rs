use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StateDto {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub state: StateDto,
}

/// City entry in a state's city listing; the state is implied by the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CitySummaryDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
