/// Scalar type used throughout the crate. The drift bound for the additive
/// recurrence (error growing roughly linearly with the sample index) assumes
/// double precision, so this stays f64.
pub type Float = f64;
