//! Error taxonomy of the correction pipeline.
//!
//! Structural preconditions (non-power-of-two grids, mismatched dimensions)
//! are programmer errors and assert. The variants here are the recoverable
//! per-image failures a caller can meaningfully report.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorrectionError {
    /// The main axis has no spread along this channel; the per-channel scale
    /// would divide by zero. Signals a pathological near-uniform cloud.
    #[error("main axis component {component} is zero, colour cloud is degenerate")]
    ZeroAxisComponent { component: usize },

    /// The main axis lies in the plane orthogonal to the cube diagonal, so
    /// no anchor on the diagonal-plane strategy exists.
    #[error("main axis is orthogonal to the cube diagonal")]
    AxisOrthogonalToDiagonal,

    /// The cloud was empty; there is nothing to estimate an axis from.
    #[error("colour cloud is empty")]
    EmptyCloud,
}
