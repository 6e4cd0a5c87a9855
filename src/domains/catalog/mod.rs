//! Catalog domain module.
//!
//! Holds the tour packages the server can sell. The catalog is seeded once at
//! startup, either from the built-in demo tours or from a JSON seed file.
//!
//! - `model.rs` - The [`TourPackage`] record
//! - `store.rs` - The [`TourCatalog`] trait and its in-memory implementation
//! - `seed.rs` - Default tours and seed-file loading
//! - `error.rs` - Catalog error types

mod error;
mod model;
pub mod seed;
mod store;

pub use error::CatalogError;
pub use model::{MAX_TOUR_PRICE, TourPackage};
pub use store::{InMemoryCatalog, TourCatalog};
