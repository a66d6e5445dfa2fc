//! SeaORM entity models for the partner unit locator schema.

pub mod prelude;

pub mod city;
pub mod partner_unit;
pub mod state;
