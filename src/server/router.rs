use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{geo, nearby, partner_unit},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Unit Locator API",
        description = "Locate active partner units in the cities nearest to a given city"
    ),
    tags(
        (name = "nearby", description = "Nearest partner unit lookup"),
        (name = "geo", description = "State and city reference data"),
        (name = "partner_unit", description = "Partner unit management")
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(nearby::get_nearby_units))
        .routes(routes!(geo::get_states))
        .routes(routes!(geo::get_state_cities))
        .routes(routes!(geo::get_city))
        .routes(routes!(partner_unit::get_city_partner_units))
        .routes(routes!(partner_unit::create_partner_unit))
        .routes(routes!(
            partner_unit::get_partner_unit,
            partner_unit::update_partner_unit,
            partner_unit::delete_partner_unit
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
