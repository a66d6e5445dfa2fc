pub use sea_orm_migration::prelude::*;

mod m20261012_000001_create_state_table;
mod m20261012_000002_create_city_table;
mod m20261012_000003_create_partner_unit_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261012_000001_create_state_table::Migration),
            Box::new(m20261012_000002_create_city_table::Migration),
            Box::new(m20261012_000003_create_partner_unit_table::Migration),
        ]
    }
}
