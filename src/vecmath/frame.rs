use std::fmt::Display;

use log::trace;

use crate::error::{Error, Result};
use crate::float::Float;
use crate::value::Value;

use super::vector::Vector3f;

/// A coordinate system: three basis vectors stored by convention as a frame.
///
/// This is a plain container. No orthogonality, unit-length or degeneracy
/// invariant is enforced; callers that need an orthonormal basis are
/// responsible for supplying one. Axes are stored by value, so later changes
/// to the caller's vectors cannot reach into the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub axis_x: Vector3f,
    pub axis_y: Vector3f,
    pub axis_z: Vector3f,
}

impl Frame {
    pub fn new(axis_x: Vector3f, axis_y: Vector3f, axis_z: Vector3f) -> Frame {
        Frame {
            axis_x,
            axis_y,
            axis_z,
        }
    }

    /// The identity basis with each axis scaled by `a`.
    pub fn from_scalar(a: Float) -> Frame {
        Frame::new(Vector3f::X * a, Vector3f::Y * a, Vector3f::Z * a)
    }

    /// Build from a positional argument list.
    ///
    /// Zero values make the identity frame, one numeric value scales the
    /// identity frame, and three vector values become the axes in order.
    /// Any other count is rejected.
    pub fn from_args(args: &[Value]) -> Result<Frame> {
        match args {
            [] => Ok(Frame::default()),
            [a] => Ok(Frame::from_scalar(a.as_float()?)),
            [a, b, c] => Ok(Frame::new(a.as_vector()?, b.as_vector()?, c.as_vector()?)),
            _ => Err(Error::InvalidArgumentCount { given: args.len() }),
        }
    }

    /// Build from named fields; unset axes keep their identity default.
    ///
    /// Keys are restricted to `"vx"`, `"vy"` and `"vz"`, and each value must
    /// be a vector. The value's kind is validated before its key is
    /// dispatched, matching the vector constructor.
    pub fn from_fields(fields: &[(&str, Value)]) -> Result<Frame> {
        let mut frame = Frame::default();
        for (key, value) in fields {
            let axis = value.as_vector()?;
            trace!("setting {}-axis", key);
            match *key {
                "vx" => frame.axis_x = axis,
                "vy" => frame.axis_y = axis,
                "vz" => frame.axis_z = axis,
                _ => return Err(Error::UnknownField((*key).to_string())),
            }
        }
        Ok(frame)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            axis_x: Vector3f::X,
            axis_y: Vector3f::Y,
            axis_z: Vector3f::Z,
        }
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.axis_x)?;
        writeln!(f, "{}", self.axis_y)?;
        write!(f, "{}", self.axis_z)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::vecmath::Vector3f;

    use super::Frame;

    #[test]
    fn default_is_identity() {
        let frame = Frame::default();
        assert_eq!(Vector3f::new(1.0, 0.0, 0.0), frame.axis_x);
        assert_eq!(Vector3f::new(0.0, 1.0, 0.0), frame.axis_y);
        assert_eq!(Vector3f::new(0.0, 0.0, 1.0), frame.axis_z);
    }

    #[test]
    fn scaled_identity() {
        let frame = Frame::from_scalar(2.0);
        assert_eq!(Vector3f::new(2.0, 0.0, 0.0), frame.axis_x);
        assert_eq!(Vector3f::new(0.0, 2.0, 0.0), frame.axis_y);
        assert_eq!(Vector3f::new(0.0, 0.0, 2.0), frame.axis_z);
    }

    #[test]
    fn axes_are_stored_in_order() {
        let x = Vector3f::new(1.0, 2.0, 3.0);
        let y = Vector3f::new(4.0, 5.0, 6.0);
        let z = Vector3f::new(7.0, 8.0, 9.0);
        let frame = Frame::new(x, y, z);
        assert_eq!(x, frame.axis_x);
        assert_eq!(y, frame.axis_y);
        assert_eq!(z, frame.axis_z);
    }

    #[test]
    fn positional_construction_forms() {
        assert_eq!(Frame::default(), Frame::from_args(&[]).unwrap());
        // The scalar may be an integer; it is widened before scaling.
        assert_eq!(Frame::from_scalar(2.0), Frame::from_args(&[2.into()]).unwrap());

        let x = Vector3f::new(1.0, 2.0, 3.0);
        let y = Vector3f::new(4.0, 5.0, 6.0);
        let z = Vector3f::new(7.0, 8.0, 9.0);
        assert_eq!(
            Frame::new(x, y, z),
            Frame::from_args(&[x.into(), y.into(), z.into()]).unwrap()
        );
    }

    #[test]
    fn positional_construction_rejects_bad_count() {
        assert_eq!(
            Err(Error::InvalidArgumentCount { given: 2 }),
            Frame::from_args(&[Vector3f::X.into(), Vector3f::Y.into()])
        );
    }

    #[test]
    fn positional_construction_rejects_wrong_kinds() {
        // The single-argument form wants a scalar, not a vector.
        assert_eq!(
            Err(Error::InvalidArgumentType { kind: "vector" }),
            Frame::from_args(&[Vector3f::X.into()])
        );
        // The three-argument form wants vectors, not scalars.
        assert_eq!(
            Err(Error::InvalidArgumentType { kind: "float" }),
            Frame::from_args(&[Vector3f::X.into(), 1.0.into(), Vector3f::Z.into()])
        );
    }

    #[test]
    fn named_construction_assigns_axes() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let frame = Frame::from_fields(&[("vy", v.into())]).unwrap();
        assert_eq!(Vector3f::X, frame.axis_x);
        assert_eq!(v, frame.axis_y);
        assert_eq!(Vector3f::Z, frame.axis_z);

        let frame =
            Frame::from_fields(&[("vz", v.into()), ("vx", v.into()), ("vy", v.into())]).unwrap();
        assert_eq!(Frame::new(v, v, v), frame);
    }

    #[test]
    fn named_construction_rejects_unknown_key() {
        assert_eq!(
            Err(Error::UnknownField("vw".to_string())),
            Frame::from_fields(&[("vw", Vector3f::X.into())])
        );
    }

    #[test]
    fn named_construction_rejects_non_vector() {
        assert_eq!(
            Err(Error::InvalidArgumentType { kind: "integer" }),
            Frame::from_fields(&[("vx", 1.into())])
        );
    }

    #[test]
    fn display_renders_one_axis_per_line() {
        let expected = "[x = 1.00000000, y = 0.00000000, z = 0.00000000]\n\
                        [x = 0.00000000, y = 1.00000000, z = 0.00000000]\n\
                        [x = 0.00000000, y = 0.00000000, z = 1.00000000]";
        assert_eq!(expected, format!("{}", Frame::default()));
    }
}
