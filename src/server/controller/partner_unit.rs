use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        partner_unit::{
            CreatePartnerUnitDto, PaginatedPartnerUnitsDto, PartnerUnitDto, UpdatePartnerUnitDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::partner_unit::{
            CreatePartnerUnitParam, GetPaginatedPartnerUnitsParam, UpdatePartnerUnitParam,
        },
        service::partner_unit::PartnerUnitService,
        state::AppState,
    },
};

/// Tag for grouping partner unit endpoints in OpenAPI documentation
pub static PARTNER_UNIT_TAG: &str = "partner_unit";

/// Create a new partner unit.
///
/// Creates a partner unit in an existing city. Units are active unless `active` is
/// explicitly `false`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Partner unit creation data
///
/// # Returns
/// - `201 Created` - Successfully created partner unit
/// - `400 Bad Request` - Blank name or address, or invalid price
/// - `404 Not Found` - City does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/units",
    tag = PARTNER_UNIT_TAG,
    request_body = CreatePartnerUnitDto,
    responses(
        (status = 201, description = "Successfully created partner unit", body = PartnerUnitDto),
        (status = 400, description = "Invalid partner unit data", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_partner_unit(
    State(state): State<AppState>,
    Json(payload): Json<CreatePartnerUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePartnerUnitParam::from_dto(payload);
    let unit = PartnerUnitService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}

/// Get a partner unit.
///
/// # Returns
/// - `200 OK` - Partner unit
/// - `404 Not Found` - Partner unit does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units/{unit_id}",
    tag = PARTNER_UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Partner unit ID")
    ),
    responses(
        (status = 200, description = "Partner unit", body = PartnerUnitDto),
        (status = 404, description = "Partner unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_partner_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let unit = PartnerUnitService::new(&state.db).get(unit_id).await?;

    Ok((StatusCode::OK, Json(unit.into_dto())))
}

/// Update a partner unit.
///
/// Replaces every mutable field of the unit. Setting `active` to `false` hides the unit
/// from nearby lookups.
///
/// # Returns
/// - `200 OK` - Successfully updated partner unit
/// - `400 Bad Request` - Blank name or address, or invalid price
/// - `404 Not Found` - Partner unit or city does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/units/{unit_id}",
    tag = PARTNER_UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Partner unit ID")
    ),
    request_body = UpdatePartnerUnitDto,
    responses(
        (status = 200, description = "Successfully updated partner unit", body = PartnerUnitDto),
        (status = 400, description = "Invalid partner unit data", body = ErrorDto),
        (status = 404, description = "Partner unit or city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_partner_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<i32>,
    Json(payload): Json<UpdatePartnerUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePartnerUnitParam::from_dto(unit_id, payload);
    let unit = PartnerUnitService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(unit.into_dto())))
}

/// Delete a partner unit.
///
/// # Returns
/// - `204 No Content` - Successfully deleted partner unit
/// - `404 Not Found` - Partner unit does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/units/{unit_id}",
    tag = PARTNER_UNIT_TAG,
    params(
        ("unit_id" = i32, Path, description = "Partner unit ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted partner unit"),
        (status = 404, description = "Partner unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_partner_unit(
    State(state): State<AppState>,
    Path(unit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PartnerUnitService::new(&state.db).delete(unit_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get paginated partner units of a city.
///
/// Lists active and inactive units ordered by name.
///
/// # Returns
/// - `200 OK` - Paginated list of partner units
/// - `400 Bad Request` - Page number out of range
/// - `404 Not Found` - City does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/units",
    tag = PARTNER_UNIT_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Paginated partner units", body = PaginatedPartnerUnitsDto),
        (status = 400, description = "Page number out of range", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_partner_units(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedPartnerUnitsParam {
        city_id,
        page: params.page,
        per_page: params.entries,
    };
    let units = PartnerUnitService::new(&state.db)
        .list_by_city(param)
        .await?;

    Ok((StatusCode::OK, Json(units.into_dto())))
}
