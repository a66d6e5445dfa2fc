use crate::server::{
    error::AppError,
    model::partner_unit::{
        CreatePartnerUnitParam, GetPaginatedPartnerUnitsParam, UpdatePartnerUnitParam,
    },
    service::{
        nearby::NearbyService,
        partner_unit::{PartnerUnitService, MAX_PER_PAGE},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list_by_city;

fn create_param(city_id: i32) -> CreatePartnerUnitParam {
    CreatePartnerUnitParam {
        city_id,
        name: "Unit Centro".to_string(),
        address: "Praça da Sé, 1".to_string(),
        phone: None,
        responsible: None,
        price: None,
        notes: None,
        active: true,
    }
}

fn update_param(id: i32, city_id: i32) -> UpdatePartnerUnitParam {
    UpdatePartnerUnitParam {
        id,
        city_id,
        name: "Unit Centro".to_string(),
        address: "Praça da Sé, 1".to_string(),
        phone: None,
        responsible: None,
        price: None,
        notes: None,
        active: true,
    }
}
