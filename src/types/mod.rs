pub mod columns;
pub mod limits;
pub mod parameter;
pub mod pollutant;
