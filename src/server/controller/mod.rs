//! HTTP request handlers.
//!
//! Controllers extract path, query and body parameters, convert DTOs into service
//! parameters, call the service layer and convert the resulting domain models back into
//! DTOs. Every handler is annotated with `utoipa::path` so the router can collect the
//! OpenAPI document.

pub mod geo;
pub mod nearby;
pub mod param;
pub mod partner_unit;

#[cfg(test)]
mod test;
