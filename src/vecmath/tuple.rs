use std::ops::{Add, Mul};

use super::has_nan::HasNan;

/// A tuple with 3 elements.
/// Shares component access between the value types and the generic helpers.
pub trait Tuple3<T> {
    fn new(x: T, y: T, z: T) -> Self;

    fn x(&self) -> T;
    fn y(&self) -> T;
    fn z(&self) -> T;
}

/// Take the dot product of two vectors.
pub fn dot3<V1, V2, T>(v: &V1, w: &V2) -> T
where
    V1: Tuple3<T> + HasNan,
    V2: Tuple3<T> + HasNan,
    T: Mul<Output = T> + Add<Output = T>,
{
    debug_assert!(!v.has_nan());
    debug_assert!(!w.has_nan());
    v.x() * w.x() + v.y() * w.y() + v.z() * w.z()
}
