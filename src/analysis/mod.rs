pub mod aggregate;
pub mod classify;
pub mod error;
pub mod series;
pub mod summary;
