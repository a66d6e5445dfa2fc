pub use super::city::Entity as City;
pub use super::partner_unit::Entity as PartnerUnit;
pub use super::state::Entity as State;
