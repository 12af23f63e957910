//! The 3D vector and coordinate-frame value types.
//!
//! A kinematic vector is three double-precision components used as either a
//! position or a velocity; a frame is three such vectors stored by
//! convention as a basis. Both are plain immutable-in-spirit values: every
//! operation returns a new instance, and equality is exact.
//!
//! The element-level helpers (`dot3`, `length3`, `has_nan3`) are generic
//! over [`Tuple3`] so the invariant checks and arithmetic live in one place
//! rather than being repeated per method.

pub mod frame;
pub mod has_nan;
pub mod length;
pub mod projection;
pub mod tuple;
pub mod vector;

pub use frame::Frame;
pub use has_nan::HasNan;
pub use length::Length;
pub use projection::vector_projection;
pub use tuple::Tuple3;
pub use vector::Vector3f;
