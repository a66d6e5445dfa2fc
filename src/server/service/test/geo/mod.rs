use crate::server::{error::AppError, service::geo::GeoService};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_city;
