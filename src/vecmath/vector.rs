use std::fmt::Display;

use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use log::trace;

use crate::error::{Error, Result};
use crate::float::Float;
use crate::value::Value;

use super::has_nan::{has_nan3, HasNan};
use super::length::{length3, length_squared3, Length};
use super::tuple::{dot3, Tuple3};

/// A 3D kinematic vector: a Cartesian triple used as a position or a
/// velocity.
///
/// Every arithmetic operation returns a new value; operands are never
/// mutated. Equality is exact and component-wise, with no epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    /// All zeroes.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// All ones.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// A unit-length vector pointing along the positive X axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive Y axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive Z axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// A uniform vector with all three components set to `a`.
    pub fn splat(a: Float) -> Self {
        Self { x: a, y: a, z: a }
    }

    /// Build from a positional argument list.
    ///
    /// Zero values make the zero vector, one numeric value is splatted
    /// across the components, and three numeric values are taken
    /// component-wise. Any other count is rejected, as is any value that is
    /// not numeric. Integers are widened to [`Float`].
    pub fn from_args(args: &[Value]) -> Result<Self> {
        match args {
            [] => Ok(Self::ZERO),
            [a] => Ok(Self::splat(a.as_float()?)),
            [a, b, c] => Ok(Self::new(a.as_float()?, b.as_float()?, c.as_float()?)),
            _ => Err(Error::InvalidArgumentCount { given: args.len() }),
        }
    }

    /// Build from named fields; unset components default to 0.0.
    ///
    /// Keys are restricted to `"x"`, `"y"` and `"z"`. Each value's numeric
    /// kind is validated before its key is dispatched.
    pub fn from_fields(fields: &[(&str, Value)]) -> Result<Self> {
        let mut v = Self::ZERO;
        for (key, value) in fields {
            let component = value.as_float()?;
            trace!("setting {}-component", key);
            match *key {
                "x" => v.x = component,
                "y" => v.y = component,
                "z" => v.z = component,
                _ => return Err(Error::UnknownField((*key).to_string())),
            }
        }
        Ok(v)
    }

    /// Compute the dot product.
    pub fn dot(&self, v: &Self) -> Float {
        dot3(self, v)
    }

    /// Divide by a scalar. Rejects a scalar that is exactly zero.
    pub fn divide(&self, s: Float) -> Result<Self> {
        if s == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(self.x / s, self.y / s, self.z / s))
    }

    /// True unless this is exactly the zero vector.
    pub fn is_nonzero(&self) -> bool {
        self.length() > 0.0
    }

    /// Add a loosely typed operand, which must be a vector.
    pub fn checked_add(&self, operand: &Value) -> Result<Self> {
        Ok(self + operand.operand_vector()?)
    }

    /// Subtract a loosely typed operand, which must be a vector.
    pub fn checked_sub(&self, operand: &Value) -> Result<Self> {
        Ok(self - operand.operand_vector()?)
    }

    /// Scale by a loosely typed operand, which must be numeric.
    pub fn checked_scale(&self, operand: &Value) -> Result<Self> {
        Ok(self * operand.operand_float()?)
    }

    /// Divide by a loosely typed operand, which must be numeric and nonzero.
    pub fn checked_div(&self, operand: &Value) -> Result<Self> {
        self.divide(operand.operand_float()?)
    }

    /// Dot with a loosely typed operand, which must be a vector.
    pub fn checked_dot(&self, operand: &Value) -> Result<Float> {
        Ok(self.dot(&operand.operand_vector()?))
    }
}

impl Tuple3<Float> for Vector3f {
    fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    fn x(&self) -> Float {
        self.x
    }

    fn y(&self) -> Float {
        self.y
    }

    fn z(&self) -> Float {
        self.z
    }
}

impl HasNan for Vector3f {
    fn has_nan(&self) -> bool {
        has_nan3(self)
    }
}

impl Length<Float> for Vector3f {
    fn length_squared(&self) -> Float {
        length_squared3(self)
    }

    fn length(&self) -> Float {
        length3(self)
    }
}

impl Default for Vector3f {
    fn default() -> Self {
        Self::ZERO
    }
}

// Vectors can be negated
impl_op_ex!(-|v: &Vector3f| -> Vector3f { Vector3f::new(-v.x, -v.y, -v.z) });
// Vectors can add and subtract with other vectors
impl_op_ex!(+ |v1: &Vector3f, v2: &Vector3f| -> Vector3f {
    Vector3f::new(v1.x + v2.x, v1.y + v2.y, v1.z + v2.z)});
impl_op_ex!(-|v1: &Vector3f, v2: &Vector3f| -> Vector3f {
    Vector3f::new(v1.x - v2.x, v1.y - v2.y, v1.z - v2.z)
});
// Vectors can be scaled. Scalar division stays a fallible named method so
// that a zero divisor is rejected instead of producing inf or NaN.
impl_op_ex_commutative!(*|v: &Vector3f, s: Float| -> Vector3f {
    Vector3f::new(v.x * s, v.y * s, v.z * s)
});

impl Display for Vector3f {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x = {:.8}, y = {:.8}, z = {:.8}]",
            self.x, self.y, self.z
        )
    }
}
