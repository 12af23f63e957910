use std::ops::{Add, Mul};

use crate::math::Sqrt;

use super::{has_nan::HasNan, tuple::Tuple3};

pub trait Length<T>: HasNan
where
    T: Mul<Output = T> + Add<Output = T> + Sqrt,
{
    fn length_squared(&self) -> T;
    fn length(&self) -> T;
}

pub fn length_squared3<V, T>(v: &V) -> T
where
    V: Tuple3<T> + HasNan,
    T: Mul<Output = T> + Add<Output = T>,
{
    debug_assert!(!v.has_nan());
    v.x() * v.x() + v.y() * v.y() + v.z() * v.z()
}

pub fn length3<V, T>(v: &V) -> T
where
    V: Tuple3<T> + HasNan,
    T: Mul<Output = T> + Add<Output = T> + Sqrt,
{
    length_squared3::<V, T>(v).sqrt()
}
