#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod corrector;
pub mod error;
pub mod image;

// “Expert” modules – still public, but considered unstable internals.
pub mod axis;
pub mod colorspace;
pub mod correct;
pub mod grid;
pub mod histogram;
pub mod hough;
pub mod pca;

// --- High-level re-exports -------------------------------------------------

// Main entry points: corrector + results.
pub use crate::corrector::{
    AxisEstimator, CastCorrector, Correction, CorrectionReport, CorrectorParams,
};
pub use crate::error::CorrectionError;

// The detection layer, generally useful on its own.
pub use crate::hough::{detect_line, DetectedLine};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::corrector::{CastCorrector, CorrectorParams};
    pub use crate::image::RgbImageU8;
}
