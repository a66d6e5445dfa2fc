use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        geo::{CityDto, CitySummaryDto, StateDto},
    },
    server::{error::AppError, service::geo::GeoService, state::AppState},
};

/// Tag for grouping state and city lookup endpoints in OpenAPI documentation
pub static GEO_TAG: &str = "geo";

/// List all states.
///
/// # Returns
/// - `200 OK` - States ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/states",
    tag = GEO_TAG,
    responses(
        (status = 200, description = "States ordered by name", body = Vec<StateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_states(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let states = GeoService::new(&state.db).list_states().await?;

    let states_dto: Vec<StateDto> = states.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(states_dto)))
}

/// List the cities of a state.
///
/// # Returns
/// - `200 OK` - Cities ordered by name
/// - `404 Not Found` - State does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/states/{state_id}/cities",
    tag = GEO_TAG,
    params(
        ("state_id" = i32, Path, description = "State ID")
    ),
    responses(
        (status = 200, description = "Cities ordered by name", body = Vec<CitySummaryDto>),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_state_cities(
    State(state): State<AppState>,
    Path(state_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cities = GeoService::new(&state.db)
        .list_cities_by_state(state_id)
        .await?;

    let cities_dto: Vec<CitySummaryDto> = cities.into_iter().map(|c| c.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(cities_dto)))
}

/// Get a city with its state.
///
/// # Returns
/// - `200 OK` - City with coordinates and state
/// - `404 Not Found` - City does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}",
    tag = GEO_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City with its state", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let city = GeoService::new(&state.db).get_city(city_id).await?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}
