use crate::server::data::city::CityRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_by_state_id;
