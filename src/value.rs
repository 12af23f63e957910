use log::debug;

use crate::error::{Error, Result};
use crate::float::Float;
use crate::vecmath::Vector3f;

/// A loosely typed constructor or operand value.
///
/// The flexible construction forms accept heterogeneous argument lists, so
/// each entry carries its runtime kind and validation can reject the wrong
/// ones with a precise error instead of a type-system dead end.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(Float),
    Str(String),
    Vector(Vector3f),
}

impl Value {
    /// The kind tag used in diagnostics and error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Vector(_) => "vector",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Interpret this value as a scalar, widening integers to [`Float`].
    pub fn as_float(&self) -> Result<Float> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => {
                debug!("integer argument {} widened to float", i);
                Ok(*i as Float)
            }
            _ => Err(Error::InvalidArgumentType { kind: self.kind() }),
        }
    }

    /// Interpret this value as a vector, copying it out.
    pub fn as_vector(&self) -> Result<Vector3f> {
        match self {
            Value::Vector(v) => Ok(*v),
            _ => Err(Error::InvalidArgumentType { kind: self.kind() }),
        }
    }

    /// [`Value::as_float`] with the failure reported as an operand error.
    pub(crate) fn operand_float(&self) -> Result<Float> {
        self.as_float()
            .map_err(|_| Error::InvalidOperandType { kind: self.kind() })
    }

    /// [`Value::as_vector`] with the failure reported as an operand error.
    pub(crate) fn operand_vector(&self) -> Result<Vector3f> {
        self.as_vector()
            .map_err(|_| Error::InvalidOperandType { kind: self.kind() })
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Value::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vector3f> for Value {
    fn from(value: Vector3f) -> Self {
        Value::Vector(value)
    }
}
