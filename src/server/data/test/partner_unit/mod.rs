use crate::server::{
    data::partner_unit::PartnerUnitRepository,
    model::partner_unit::{CreatePartnerUnitParam, UpdatePartnerUnitParam},
};
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_active_with_city;

fn create_param(city_id: i32, name: &str) -> CreatePartnerUnitParam {
    CreatePartnerUnitParam {
        city_id,
        name: name.to_string(),
        address: "Av. Paulista, 1000".to_string(),
        phone: Some("+55 11 5555-0000".to_string()),
        responsible: Some("Maria".to_string()),
        price: Some(150.0),
        notes: None,
        active: true,
    }
}
