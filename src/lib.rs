pub mod core;
pub mod integrators;
