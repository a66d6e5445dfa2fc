use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, nearby::NearbyUnitsDto},
    server::{error::AppError, service::nearby::NearbyService, state::AppState},
};

/// Tag for grouping nearby lookup endpoints in OpenAPI documentation
pub static NEARBY_TAG: &str = "nearby";

/// Find the partner units nearest to a city.
///
/// Returns the active partner units of the three cities closest to the given city,
/// grouped by city and ordered by great-circle distance. A city with no active partner
/// units anywhere yields `found: false` and an explanatory message rather than an error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `city_id` - ID of the city to search around
///
/// # Returns
/// - `200 OK` - Grouped nearby units, or an empty result with a message
/// - `404 Not Found` - City does not exist
/// - `503 Service Unavailable` - Database unreachable
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/nearby-units",
    tag = NEARBY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Nearby partner units grouped by city", body = NearbyUnitsDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nearby_units(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let nearby = NearbyService::new(&state.db)
        .find_nearby_units(city_id)
        .await?;

    Ok((StatusCode::OK, Json(nearby.into_dto())))
}
