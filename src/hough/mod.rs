//! Fast dyadic Hough transform and the dual-orientation line detector.

mod detector;
mod transform;

pub use detector::{detect_line, DetectedLine};
pub use transform::{level_count, transform};
