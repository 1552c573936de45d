use super::types::Float;

pub const DOUBLE_ONE_MINUS_EPSILON: f64 = 0.99999999999999989;

/// Largest representable value below 1.0; coordinates are clamped here so
/// that emitted points stay inside the half-open unit interval.
pub const ONE_MINUS_EPSILON: Float = DOUBLE_ONE_MINUS_EPSILON;

pub const PI: Float = std::f64::consts::PI;
pub const PI_OVER_2: Float = PI / 2.0; //1.57079632679489661923
pub const INV_PI: Float = std::f64::consts::FRAC_1_PI;
