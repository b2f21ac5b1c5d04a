//! Vector math utilities for look-angle calculations
//!
//! Helper functions for the small fixed-size vector operations used when
//! turning satellite and observer positions into topocentric angles.

/// Calculate the dot product of two 3D vectors
///
/// # Arguments
/// * `a` - First vector [x, y, z]
/// * `b` - Second vector [x, y, z]
///
/// # Returns
/// Scalar dot product a·b
pub fn dot_product(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Calculate the magnitude (length) of a 3D vector
pub fn vector_magnitude(v: &[f64; 3]) -> f64 {
    dot_product(v, v).sqrt()
}

/// Component-wise difference `a - b`
pub fn subtract(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Rotate a vector about the z axis by `angle` radians (counter-clockwise)
pub fn rotate_z(v: &[f64; 3], angle: f64) -> [f64; 3] {
    let (sin_a, cos_a) = angle.sin_cos();
    [
        cos_a * v[0] - sin_a * v[1],
        sin_a * v[0] + cos_a * v[1],
        v[2],
    ]
}
