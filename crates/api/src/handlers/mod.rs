pub mod series;
pub mod user;
