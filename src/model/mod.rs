//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs are plain serde types documented with `utoipa::ToSchema`. Server-side domain
//! models convert into these at the controller boundary.

pub mod api;
pub mod geo;
pub mod nearby;
pub mod partner_unit;
