//! Dual-orientation line detection on a smoothed accumulator.
//!
//! The dyadic transform only enumerates right-leaning lines (non-negative
//! drift). Left-leaning lines are covered by running the same pure transform
//! on a column-mirrored copy and reflecting the winner's endpoints back into
//! original coordinates.

use log::debug;
use serde::Serialize;

use super::transform::transform;
use crate::grid::Grid;

/// Arg-max line of one detector run, as the columns where it crosses the top
/// (`row 0`) and bottom (`row D`) of the discretized plane. `bottom` may
/// leave `[0, D)` — it is `top + drift` unwrapped, and negative for a
/// left-leaning winner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DetectedLine {
    /// Column at row 0.
    pub top: i32,
    /// Column at row D.
    pub bottom: i32,
    /// Accumulated mass along the line.
    pub score: f32,
}

/// Detect the dominant line of `plane`, trying both orientation families.
///
/// Tie-break is deliberately asymmetric: the mirrored (left-leaning) pass
/// wins only when its maximum strictly exceeds the direct pass. Callers that
/// need reproducible output must preserve this exact comparison.
pub fn detect_line(plane: &Grid) -> DetectedLine {
    let d = plane.side() as i32;

    let direct = transform(plane);
    let (drift, start, score) = direct.argmax();

    let mirrored = transform(&plane.mirrored());
    let (m_drift, m_start, m_score) = mirrored.argmax();

    debug!(
        "hough passes: direct {:.4} at ({drift}, {start}), mirrored {:.4} at ({m_drift}, {m_start})",
        score, m_score
    );

    if m_score > score {
        let top = d - 1 - m_start as i32;
        DetectedLine {
            top,
            bottom: top - m_drift as i32,
            score: m_score,
        }
    } else {
        DetectedLine {
            top: start as i32,
            bottom: start as i32 + drift as i32,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{detect_line, DetectedLine};
    use crate::grid::Grid;

    #[test]
    fn equal_orientation_maxima_default_to_the_direct_pass() {
        // Two full-height vertical lines at columns 1 and 2: the grid is
        // symmetric under column reversal, so both passes see the same
        // maximum. The direct pass must win, reporting column 1 (the
        // first-encountered maximum), not the mirrored remap of it.
        let mut g = Grid::new(4);
        for r in 0..4 {
            g.set(r, 1, 1.0);
            g.set(r, 2, 1.0);
        }
        let line = detect_line(&g);
        assert_eq!(
            line,
            DetectedLine {
                top: 1,
                bottom: 1,
                score: 4.0
            }
        );
    }

    #[test]
    fn left_leaning_line_is_found_via_the_mirrored_pass() {
        // The mirror image of the drift-2, start-0 dyadic line for D=4
        // (offsets 0,1,1,2): columns 3,2,2,1 from top to bottom. No
        // right-leaning line passes through more than two of these cells.
        let mut g = Grid::new(4);
        for (r, c) in [(0, 3), (1, 2), (2, 2), (3, 1)] {
            g.set(r, c, 1.0);
        }
        let line = detect_line(&g);
        assert_eq!(
            line,
            DetectedLine {
                top: 3,
                bottom: 1,
                score: 4.0
            }
        );
    }

    #[test]
    fn all_zero_grid_degenerates_to_the_origin_line() {
        let line = detect_line(&Grid::new(8));
        assert_eq!(
            line,
            DetectedLine {
                top: 0,
                bottom: 0,
                score: 0.0
            }
        );
    }
}
