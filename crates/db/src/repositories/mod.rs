//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod series_repo;
pub mod user_repo;

pub use series_repo::SeriesRepo;
pub use user_repo::UserRepo;
