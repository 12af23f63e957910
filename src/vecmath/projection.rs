use crate::error::{Error, Result};

use super::vector::Vector3f;

/// Decompose `u` against `v`.
///
/// With `alpha = dot(u, v) / dot(v, v)` and `u_star = u * alpha`, the
/// returned pair is `(u_star, v - u_star)`. The second component is measured
/// from `v`, not from `u`; callers wanting the textbook orthogonal
/// complement of `u` should compute `u - u_star` themselves.
///
/// Fails when `v` is exactly the zero vector, since `dot(v, v)` is zero.
pub fn vector_projection(u: &Vector3f, v: &Vector3f) -> Result<(Vector3f, Vector3f)> {
    let denom = v.dot(v);
    if denom == 0.0 {
        return Err(Error::DivisionByZero);
    }
    let alpha = u.dot(v) / denom;
    let u_star = u * alpha;
    Ok((u_star, v - u_star))
}
