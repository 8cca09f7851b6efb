//! Row structs decoded from the database.
//!
//! Each submodule contains `FromRow` structs matching the queried columns
//! and conversions into the domain types from `shipdeck_core`.

pub mod project;
