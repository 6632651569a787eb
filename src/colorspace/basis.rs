//! Orthonormal rotation between linear RGB and the lightness/chroma basis
//! the projection histograms live in:
//!
//! ```text
//! L     = (r + g + b) / √3
//! alpha = (r − g) / √2
//! beta  = (2b − r − g) / √6
//! ```
//!
//! The inverse is the transpose. The physical span of each axis over the
//! unit colour cube fixes the histogram binning and must not drift.

use nalgebra::{Matrix3, Vector3};

/// Span of the lightness axis over the unit cube: `3/√3 = √3`.
pub const L_AXIS_LEN: f32 = 1.732_050_8;
/// Span of the first chroma axis: `√2` (values in `[−√2/2, √2/2]`).
pub const ALPHA_AXIS_LEN: f32 = std::f32::consts::SQRT_2;
/// Span of the second chroma axis: `4/√6`.
pub const BETA_AXIS_LEN: f32 = 1.632_993_2;

/// Rotation taking linear RGB to `(L, alpha, beta)`.
pub fn rgb_to_axis() -> Matrix3<f32> {
    let s3 = 1.0 / 3f32.sqrt();
    let s2 = 1.0 / 2f32.sqrt();
    let s6 = 1.0 / 6f32.sqrt();
    Matrix3::new(
        s3, s3, s3, //
        s2, -s2, 0.0, //
        -s6, -s6, 2.0 * s6,
    )
}

/// Inverse rotation (the transpose, the basis being orthonormal).
pub fn axis_to_rgb() -> Matrix3<f32> {
    rgb_to_axis().transpose()
}

/// Rotate one linear-RGB point into the axis basis.
#[inline]
pub fn to_axis_basis(rgb: &Vector3<f32>) -> Vector3<f32> {
    rgb_to_axis() * rgb
}
