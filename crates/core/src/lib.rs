pub mod error;
pub mod tracking;
pub mod types;
