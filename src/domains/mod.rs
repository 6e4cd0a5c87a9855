//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the tour packages on sale
//! - **bookings**: reservations made against those tours
//! - **query**: read-only lookups across both stores
//! - **tools**: the MCP tools that expose the engines to clients

pub mod bookings;
pub mod catalog;
pub mod query;
pub mod services;
pub mod tools;

pub use services::TourServices;
