//! Domain layer for the Shipdeck project registry.
//!
//! Holds everything that does not touch I/O: identifier types, the error
//! taxonomy, raw parameter coercion, project validation, the persistence
//! contract, and the registry operations built on top of it.

pub mod error;
pub mod params;
pub mod project;
pub mod registry;
pub mod search;
pub mod store;
pub mod types;
