pub mod base;
pub mod error;
pub mod lowdiscrepancy;
pub mod prelude;
pub mod progress;
pub mod rng;
pub mod sequence;
