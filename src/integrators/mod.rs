pub mod domain;
pub mod qmc;

pub use domain::*;
pub use qmc::*;
