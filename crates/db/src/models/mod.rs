//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as returned by the API
//! - `FromRow` row structs matching the database tables
//! - `Deserialize` request DTOs

pub mod lenient;
pub mod series;
pub mod user;
