//! Fusing the two plane detections into one 3-D grey point and main axis.

use nalgebra::{Matrix3, Vector3};
use serde::Serialize;

use crate::colorspace::{ALPHA_AXIS_LEN, BETA_AXIS_LEN, L_AXIS_LEN};
use crate::hough::DetectedLine;

/// One plane's detection mapped back from grid-index space to the physical
/// channel range (the inverse of the histogram binning).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisEstimate {
    /// Chroma value where the line crosses lightness 0.
    pub value_at_low: f32,
    /// Chroma value where the line crosses the top of the lightness span.
    pub value_at_high: f32,
}

impl AxisEstimate {
    pub fn from_line(line: &DetectedLine, side: usize, axis_len: f32) -> Self {
        let scale = axis_len / side as f32;
        let half = axis_len / 2.0;
        Self {
            value_at_low: line.top as f32 * scale - half,
            value_at_high: line.bottom as f32 * scale - half,
        }
    }
}

/// A point on the colour cloud's dominant line plus its direction. The
/// coordinates are whatever basis the producer worked in; `map` rotates both
/// members into another basis.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ColorAxis {
    pub grey_point: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl ColorAxis {
    pub fn map(&self, rotation: &Matrix3<f32>) -> ColorAxis {
        ColorAxis {
            grey_point: rotation * self.grey_point,
            direction: rotation * self.direction,
        }
    }
}

/// Combine the two plane detections, assumed to be projections of the same
/// 3-D line, into that line expressed in the lightness/chroma basis. The
/// grey point is anchored at the lightness-0 endpoint.
pub fn fuse_axes(la: &DetectedLine, lb: &DetectedLine, side: usize) -> ColorAxis {
    let alpha = AxisEstimate::from_line(la, side, ALPHA_AXIS_LEN);
    let beta = AxisEstimate::from_line(lb, side, BETA_AXIS_LEN);
    let grey_point = Vector3::new(0.0, alpha.value_at_low, beta.value_at_low);
    let tip = Vector3::new(L_AXIS_LEN, alpha.value_at_high, beta.value_at_high);
    ColorAxis {
        grey_point,
        direction: tip - grey_point,
    }
}
