//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let state = factory::create_state(&db).await?;
//!     let city = factory::create_city(&db, state.id).await?;
//!     let unit = factory::create_partner_unit(&db, city.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let city = factory::city::CityFactory::new(&db, state.id)
//!     .name("Campinas")
//!     .coordinates(-22.90, -47.06)
//!     .build()
//!     .await?;
//!
//! let unit = factory::partner_unit::PartnerUnitFactory::new(&db, city.id)
//!     .name("Unit Centro")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `state` - Create state entities
//! - `city` - Create city entities
//! - `partner_unit` - Create partner unit entities
//! - `helpers` - ID generation and dependency helpers

pub mod city;
pub mod helpers;
pub mod partner_unit;
pub mod state;

pub use city::create_city;
pub use helpers::create_city_with_state;
pub use partner_unit::create_partner_unit;
pub use state::create_state;
