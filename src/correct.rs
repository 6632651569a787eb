//! Affine cube correction: map the detected axis onto the grey diagonal.
//!
//! The anchor point and axis define a line in linear RGB. Correction
//! translates the anchor to the cube centre `(½, ½, ½)` and scales each
//! channel by `Σ axis_j / (3 · axis_i)`, exactly the factor that turns a
//! vector equal to the axis into one collinear with `(1, 1, 1)`.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::axis::ColorAxis;
use crate::error::CorrectionError;

/// Centre of the unit colour cube, the post-correction neutral point.
pub fn cube_center() -> Vector3<f32> {
    Vector3::new(0.5, 0.5, 0.5)
}

/// How the anchor (the point sent to the cube centre) is chosen on the
/// detected line.
///
/// The Hough estimator reports its line's lightness-0 endpoint as the grey
/// point; anchoring there (`AxisEndpoint`) reproduces that behaviour but
/// shifts an already-neutral image, because a black-anchored cloud gets
/// translated to the centre wholesale. `DiagonalPlane` instead intersects
/// the line with the plane through the centre orthogonal to the diagonal,
/// matching the PCA variant and making the correction idempotent on a
/// cast-free image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorStrategy {
    /// Use the axis line's lightness-0 endpoint as reported.
    AxisEndpoint,
    /// Slide along the axis to the plane `diag · (p - centre) = 0`.
    #[default]
    DiagonalPlane,
}

/// Resolve the anchor for `axis` under `strategy`.
pub fn anchor_point(
    axis: &ColorAxis,
    strategy: AnchorStrategy,
) -> Result<Vector3<f32>, CorrectionError> {
    match strategy {
        AnchorStrategy::AxisEndpoint => Ok(axis.grey_point),
        AnchorStrategy::DiagonalPlane => {
            let diag = Vector3::new(1.0, 1.0, 1.0).normalize();
            let along = diag.dot(&axis.direction);
            if along == 0.0 {
                return Err(CorrectionError::AxisOrthogonalToDiagonal);
            }
            let t = diag.dot(&(cube_center() - axis.grey_point)) / along;
            Ok(axis.grey_point + axis.direction * t)
        }
    }
}

/// Apply the correction in place over a flattened linear-RGB cloud.
pub fn apply_correction(
    cloud: &mut [Vector3<f32>],
    axis: &ColorAxis,
    strategy: AnchorStrategy,
) -> Result<(), CorrectionError> {
    let u = axis.direction;
    for component in 0..3 {
        if u[component] == 0.0 {
            return Err(CorrectionError::ZeroAxisComponent { component });
        }
    }
    let anchor = anchor_point(axis, strategy)?;
    let sum = u.x + u.y + u.z;
    let scale = Vector3::new(sum / (3.0 * u.x), sum / (3.0 * u.y), sum / (3.0 * u.z));
    let center = cube_center();
    for p in cloud {
        *p = (*p - anchor).component_mul(&scale) + center;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{anchor_point, apply_correction, AnchorStrategy};
    use crate::axis::ColorAxis;
    use crate::error::CorrectionError;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    fn synthetic_axis() -> ColorAxis {
        ColorAxis {
            grey_point: Vector3::new(0.3, 0.3, 0.3),
            direction: Vector3::new(2.0, 1.0, 1.0),
        }
    }

    #[test]
    fn grey_point_lands_on_the_cube_centre() {
        let axis = synthetic_axis();
        let mut cloud: Vec<Vector3<f32>> = (-5..=5)
            .map(|t| axis.grey_point + axis.direction * (t as f32 * 0.02))
            .collect();
        apply_correction(&mut cloud, &axis, AnchorStrategy::AxisEndpoint).unwrap();
        // the point that was the grey point (t = 0)
        assert_abs_diff_eq!(cloud[5], Vector3::new(0.5, 0.5, 0.5), epsilon = 1e-5);
    }

    #[test]
    fn axis_direction_becomes_collinear_with_the_diagonal() {
        let axis = synthetic_axis();
        let mut pair = [axis.grey_point, axis.grey_point + axis.direction];
        apply_correction(&mut pair, &axis, AnchorStrategy::AxisEndpoint).unwrap();
        let mapped = pair[1] - pair[0];
        assert_abs_diff_eq!(mapped.x, mapped.y, epsilon = 1e-5);
        assert_abs_diff_eq!(mapped.y, mapped.z, epsilon = 1e-5);
        assert!(mapped.x > 0.0);
    }

    #[test]
    fn zero_axis_component_is_rejected() {
        let axis = ColorAxis {
            grey_point: Vector3::zeros(),
            direction: Vector3::new(1.0, 0.0, 1.0),
        };
        let mut cloud = [Vector3::zeros()];
        let err = apply_correction(&mut cloud, &axis, AnchorStrategy::AxisEndpoint).unwrap_err();
        assert_eq!(err, CorrectionError::ZeroAxisComponent { component: 1 });
    }

    #[test]
    fn diagonal_plane_anchor_of_a_neutral_axis_is_the_centre() {
        let axis = ColorAxis {
            grey_point: Vector3::zeros(),
            direction: Vector3::new(1.0, 1.0, 1.0),
        };
        let anchor = anchor_point(&axis, AnchorStrategy::DiagonalPlane).unwrap();
        assert_abs_diff_eq!(anchor, Vector3::new(0.5, 0.5, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn neutral_cloud_is_untouched_under_the_diagonal_plane_anchor() {
        let axis = ColorAxis {
            grey_point: Vector3::zeros(),
            direction: Vector3::new(1.0, 1.0, 1.0),
        };
        let original: Vec<Vector3<f32>> =
            (0..8).map(|i| Vector3::repeat(i as f32 / 8.0)).collect();
        let mut cloud = original.clone();
        apply_correction(&mut cloud, &axis, AnchorStrategy::DiagonalPlane).unwrap();
        for (after, before) in cloud.iter().zip(&original) {
            assert_abs_diff_eq!(after, before, epsilon = 1e-6);
        }
    }
}
