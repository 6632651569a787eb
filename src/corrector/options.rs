//! Parameter types configuring the correction pipeline.

use serde::{Deserialize, Serialize};

use crate::correct::AnchorStrategy;
use crate::histogram::SAMPLE_WEIGHT;

/// Which estimator finds the colour cloud's main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisEstimator {
    /// Fast dyadic Hough transform over the two chroma-plane projections.
    #[default]
    Hough,
    /// Covariance eigen-decomposition of the linear-RGB cloud.
    Pca,
}

/// Pipeline-wide knobs. `discretization` must stay a power of two, the
/// transform's recursive halving depends on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrectorParams {
    /// Accumulator side length `D`.
    pub discretization: usize,
    /// Gaussian sigma applied to both histograms before detection.
    pub smoothing_sigma: f32,
    /// Histogram mass per sample (sub-unit so dense images stay well inside
    /// `f32` precision).
    pub sample_weight: f32,
    /// Axis estimator driving the correction.
    pub estimator: AxisEstimator,
    /// Anchor choice on the detected line.
    pub anchor: AnchorStrategy,
}

impl Default for CorrectorParams {
    fn default() -> Self {
        Self {
            discretization: 512,
            smoothing_sigma: 3.0,
            sample_weight: SAMPLE_WEIGHT,
            estimator: AxisEstimator::default(),
            anchor: AnchorStrategy::default(),
        }
    }
}
