//! The orchestrator: sRGB image in, cast-corrected sRGB image out.
//!
//! Pipeline: gamma decode → linear-RGB cloud → two lightness/chroma
//! histograms → line detection per plane → axis fusion → affine cube
//! correction → gamma encode. Everything between decode and encode operates
//! on the flattened cloud; no I/O happens in the hot path.

mod options;

pub use options::{AxisEstimator, CorrectorParams};

use log::{debug, info};
use nalgebra::Vector3;
use serde::Serialize;
use std::time::Instant;

use crate::axis::{fuse_axes, ColorAxis};
use crate::colorspace::{axis_to_rgb, encode_gamma, GammaTable};
use crate::correct::apply_correction;
use crate::error::CorrectionError;
use crate::histogram::{gaussian_smooth, project_cloud};
use crate::hough::{detect_line, DetectedLine};
use crate::image::{RgbImageF32, RgbImageU8};
use crate::pca::estimate_axis_pca;

/// What the pipeline found, serializable for reporting.
#[derive(Clone, Debug, Serialize)]
pub struct CorrectionReport {
    /// Anchor-independent grey point as reported by the estimator (linear RGB).
    pub grey_point: Vector3<f32>,
    /// Main axis direction (linear RGB, unnormalized).
    pub main_axis: Vector3<f32>,
    /// Winning line of the lightness/alpha plane (Hough estimator only).
    pub la_line: Option<DetectedLine>,
    /// Winning line of the lightness/beta plane (Hough estimator only).
    pub lb_line: Option<DetectedLine>,
    pub latency_ms: f64,
}

/// A corrected image together with its report.
#[derive(Clone, Debug)]
pub struct Correction {
    /// Corrected image, sRGB floats in [0, 1] (unclamped).
    pub image: RgbImageF32,
    pub report: CorrectionReport,
}

/// Global colour-cast corrector. Cheap to construct; holds only parameters
/// and a reference to the shared gamma table.
pub struct CastCorrector {
    params: CorrectorParams,
    gamma: &'static GammaTable,
}

impl CastCorrector {
    /// Panics unless `params.discretization` is a power of two.
    pub fn new(params: CorrectorParams) -> Self {
        assert!(
            params.discretization.is_power_of_two(),
            "discretization must be a power of two, got {}",
            params.discretization
        );
        Self {
            params,
            gamma: GammaTable::shared(),
        }
    }

    pub fn params(&self) -> &CorrectorParams {
        &self.params
    }

    /// Correct one sRGB image.
    pub fn process(&self, image: &RgbImageU8) -> Result<Correction, CorrectionError> {
        let mut cloud = image.to_linear_cloud(self.gamma);
        let report = self.correct_linear(&mut cloud)?;
        for p in &mut cloud {
            *p = p.map(encode_gamma);
        }
        Ok(Correction {
            image: RgbImageF32::from_cloud(image.w, image.h, &cloud),
            report,
        })
    }

    /// Core boundary: correct a flattened linear-RGB cloud in place.
    pub fn correct_linear(
        &self,
        cloud: &mut [Vector3<f32>],
    ) -> Result<CorrectionReport, CorrectionError> {
        if cloud.is_empty() {
            return Err(CorrectionError::EmptyCloud);
        }
        let t0 = Instant::now();

        let (axis, la_line, lb_line) = match self.params.estimator {
            AxisEstimator::Hough => {
                let (axis, la, lb) = self.estimate_axis_hough(cloud);
                (axis, Some(la), Some(lb))
            }
            AxisEstimator::Pca => (estimate_axis_pca(cloud)?, None, None),
        };
        info!(
            "main axis: grey_point=({:.4}, {:.4}, {:.4}) direction=({:.4}, {:.4}, {:.4})",
            axis.grey_point.x,
            axis.grey_point.y,
            axis.grey_point.z,
            axis.direction.x,
            axis.direction.y,
            axis.direction.z
        );

        apply_correction(cloud, &axis, self.params.anchor)?;

        Ok(CorrectionReport {
            grey_point: axis.grey_point,
            main_axis: axis.direction,
            la_line,
            lb_line,
            latency_ms: t0.elapsed().as_secs_f64() * 1e3,
        })
    }

    fn estimate_axis_hough(
        &self,
        cloud: &[Vector3<f32>],
    ) -> (ColorAxis, DetectedLine, DetectedLine) {
        let d = self.params.discretization;
        let mut hist = project_cloud(cloud, d, self.params.sample_weight);
        gaussian_smooth(&mut hist.la, self.params.smoothing_sigma);
        gaussian_smooth(&mut hist.lb, self.params.smoothing_sigma);

        let la_line = detect_line(&hist.la);
        let lb_line = detect_line(&hist.lb);
        debug!("la plane: {la_line:?}");
        debug!("lb plane: {lb_line:?}");

        let axis = fuse_axes(&la_line, &lb_line, d).map(&axis_to_rgb());
        (axis, la_line, lb_line)
    }
}

impl Default for CastCorrector {
    fn default() -> Self {
        Self::new(CorrectorParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastCorrector, CorrectorParams};
    use crate::correct::AnchorStrategy;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    fn diagonal_cloud() -> Vec<Vector3<f32>> {
        (1..32).map(|i| Vector3::repeat(i as f32 / 32.0)).collect()
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn non_power_of_two_discretization_is_rejected() {
        let _ = CastCorrector::new(CorrectorParams {
            discretization: 500,
            ..Default::default()
        });
    }

    #[test]
    fn neutral_cloud_is_a_fixed_point() {
        let corrector = CastCorrector::new(CorrectorParams {
            discretization: 128,
            ..Default::default()
        });
        let original = diagonal_cloud();
        let mut cloud = original.clone();
        let report = corrector.correct_linear(&mut cloud).unwrap();
        let dir = report.main_axis.normalize();
        assert_abs_diff_eq!(dir, Vector3::repeat(1.0 / 3f32.sqrt()), epsilon = 0.05);
        for (after, before) in cloud.iter().zip(&original) {
            assert_abs_diff_eq!(after, before, epsilon = 0.02);
        }
    }

    #[test]
    fn axis_endpoint_anchor_recentres_a_black_anchored_cloud() {
        let corrector = CastCorrector::new(CorrectorParams {
            discretization: 128,
            anchor: AnchorStrategy::AxisEndpoint,
            ..Default::default()
        });
        let mut cloud = diagonal_cloud();
        corrector.correct_linear(&mut cloud).unwrap();
        // the lightness-0 endpoint (black) moves to the cube centre
        let darkest = cloud
            .iter()
            .cloned()
            .reduce(|a, b| if a.sum() < b.sum() { a } else { b })
            .unwrap();
        assert!(darkest.x > 0.4, "darkest sample not recentred: {darkest}");
    }

    #[test]
    fn empty_cloud_is_an_error() {
        let corrector = CastCorrector::default();
        let mut cloud: Vec<Vector3<f32>> = Vec::new();
        assert!(corrector.correct_linear(&mut cloud).is_err());
    }
}
