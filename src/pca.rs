//! Alternative axis estimator: principal component of the colour cloud.
//!
//! Solves the same problem as the Hough pipeline with a covariance
//! eigen-decomposition instead of line accumulation. The reported grey
//! point is the cloud mean; pair this estimator with
//! [`AnchorStrategy::DiagonalPlane`](crate::correct::AnchorStrategy) to slide
//! the mean onto the neutral plane before correcting.

use nalgebra::{Matrix3, SymmetricEigen, Vector3};

use crate::axis::ColorAxis;
use crate::error::CorrectionError;

/// Estimate the dominant axis of a linear-RGB cloud.
pub fn estimate_axis_pca(cloud: &[Vector3<f32>]) -> Result<ColorAxis, CorrectionError> {
    if cloud.is_empty() {
        return Err(CorrectionError::EmptyCloud);
    }
    let n = cloud.len() as f32;
    let mean: Vector3<f32> = cloud.iter().sum::<Vector3<f32>>() / n;

    let mut cov = Matrix3::zeros();
    for p in cloud {
        let d = p - mean;
        cov += d * d.transpose();
    }
    cov /= n;

    let eigen = SymmetricEigen::new(cov);
    let mut leading = 0;
    for i in 1..3 {
        if eigen.eigenvalues[i] > eigen.eigenvalues[leading] {
            leading = i;
        }
    }
    let mut direction: Vector3<f32> = eigen.eigenvectors.column(leading).into_owned();
    // orient towards white so the two estimators agree in sign
    if direction.x + direction.y + direction.z < 0.0 {
        direction = -direction;
    }

    Ok(ColorAxis {
        grey_point: mean,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::estimate_axis_pca;
    use crate::error::CorrectionError;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn recovers_a_synthetic_line_direction() {
        let true_dir = Vector3::new(2.0f32, 1.0, 1.0).normalize();
        let anchor = Vector3::new(0.3f32, 0.3, 0.3);
        let cloud: Vec<Vector3<f32>> = (-10..=10)
            .map(|t| anchor + true_dir * (t as f32 * 0.01))
            .collect();
        let axis = estimate_axis_pca(&cloud).unwrap();
        assert_abs_diff_eq!(axis.grey_point, anchor, epsilon = 1e-5);
        let cos = axis.direction.normalize().dot(&true_dir);
        assert!(cos > 0.9999, "direction off: cos={cos}");
    }

    #[test]
    fn empty_cloud_is_an_error() {
        assert_eq!(
            estimate_axis_pca(&[]).unwrap_err(),
            CorrectionError::EmptyCloud
        );
    }
}
