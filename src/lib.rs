mod error;
mod float;
mod is_nan;
mod math;
mod value;
pub mod vecmath;

// For convenience, re-export.
pub use error::{Error, Result};
pub use float::Float;
pub use value::Value;
pub use vecmath::{vector_projection, Frame, HasNan, Length, Tuple3, Vector3f};
