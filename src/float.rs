/// The element type for all vector components.
///
/// Kinematic quantities are stored in double precision regardless of how
/// they were supplied; equality and zero tests on them are exact.
pub type Float = f64;
