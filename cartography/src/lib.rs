pub mod attributes;
pub mod bodies;
pub mod catalog;
pub mod constants;
pub mod curve;
pub mod elements;
pub mod error;
pub mod file_export;
pub mod kepler;
pub mod math;
pub mod prelude;
pub mod sampler;
pub mod units;
