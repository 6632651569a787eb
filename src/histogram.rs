//! Projection histograms over the colour cloud and their Gaussian smoothing.
//!
//! Each pixel contributes a small fixed weight to two `D × D` accumulators:
//! lightness vs the first chroma axis and lightness vs the second. The
//! sub-unit weight keeps dense images far from the limits of `f32`
//! accumulation.

use nalgebra::Vector3;

use crate::colorspace::{rgb_to_axis, ALPHA_AXIS_LEN, BETA_AXIS_LEN, L_AXIS_LEN};
use crate::grid::Grid;

/// Mass one sample adds to its histogram bin.
pub const SAMPLE_WEIGHT: f32 = 0.01;

/// The two chroma-plane projections of one colour cloud.
#[derive(Clone, Debug)]
pub struct ProjectionHistograms {
    /// Lightness vs alpha (row = lightness bin, column = chroma bin).
    pub la: Grid,
    /// Lightness vs beta.
    pub lb: Grid,
}

/// Bin a linear-RGB cloud into the two lightness/chroma histograms.
pub fn project_cloud(cloud: &[Vector3<f32>], side: usize, weight: f32) -> ProjectionHistograms {
    let mut la = Grid::new(side);
    let mut lb = Grid::new(side);
    let d = side as f32;
    let last = d - 1.0;
    let rot = rgb_to_axis();
    for rgb in cloud {
        let p = rot * rgb;
        let row = (p.x * d / L_AXIS_LEN).clamp(0.0, last) as usize;
        let col_a = (p.y * d / ALPHA_AXIS_LEN + d / 2.0).clamp(0.0, last) as usize;
        let col_b = (p.z * d / BETA_AXIS_LEN + d / 2.0).clamp(0.0, last) as usize;
        la.add(row, col_a, weight);
        lb.add(row, col_b, weight);
    }
    ProjectionHistograms { la, lb }
}

/// Window width for `sigma`: the smallest odd integer not below `6·sigma`.
pub fn gaussian_window(sigma: f32) -> usize {
    let w = (6.0 * sigma) as usize;
    w + (w + 1) % 2
}

/// Separable Gaussian smoothing with reflect-101 borders.
pub fn gaussian_smooth(grid: &mut Grid, sigma: f32) {
    let taps = gaussian_taps(sigma);
    let half = taps.len() / 2;
    let side = grid.side();
    let mut scratch = vec![0.0f32; side];

    // Horizontal pass, row by row.
    for r in 0..side {
        {
            let row = grid.row(r);
            for (c, out) in scratch.iter_mut().enumerate() {
                let mut acc = 0.0;
                for (j, &tap) in taps.iter().enumerate() {
                    let idx = reflect_101(c as isize + j as isize - half as isize, side);
                    acc += tap * row[idx];
                }
                *out = acc;
            }
        }
        grid.row_mut(r).copy_from_slice(&scratch);
    }

    // Vertical pass, column by column.
    let mut column = vec![0.0f32; side];
    for c in 0..side {
        for r in 0..side {
            column[r] = grid.get(r, c);
        }
        for (r, out) in scratch.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (j, &tap) in taps.iter().enumerate() {
                let idx = reflect_101(r as isize + j as isize - half as isize, side);
                acc += tap * column[idx];
            }
            *out = acc;
        }
        for r in 0..side {
            grid.set(r, c, scratch[r]);
        }
    }
}

fn gaussian_taps(sigma: f32) -> Vec<f32> {
    let window = gaussian_window(sigma);
    let half = (window / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (-half..=half)
        .map(|j| (-(j * j) as f32 / denom).exp())
        .collect();
    let total: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= total;
    }
    taps
}

/// Border reflection without repeating the edge sample (`dcb|abcd|cba`).
fn reflect_101(idx: isize, len: usize) -> usize {
    let len = len as isize;
    if len == 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let mut i = idx.rem_euclid(period);
    if i >= len {
        i = period - i;
    }
    i as usize
}
