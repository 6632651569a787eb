//! Square power-of-two accumulator grid backing the fast Hough transform.
//!
//! One owned row-major `f32` buffer with explicit index arithmetic. The merge
//! never holds aliased views into the storage: callers address sub-ranges by
//! row offsets and copy a snapshot before writing, which keeps ownership
//! unambiguous while preserving the no-copy row access of the original
//! in-place formulation.

/// `D × D` accumulator of non-negative line mass, `D` a power of two.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    side: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Construct a zeroed grid. Panics unless `side` is a power of two; the
    /// recursive halving of the transform is meaningless otherwise, so this
    /// is a precondition rather than a recoverable error.
    pub fn new(side: usize) -> Self {
        assert!(
            side.is_power_of_two(),
            "grid side must be a power of two, got {side}"
        );
        Self {
            side,
            data: vec![0.0; side * side],
        }
    }

    /// Side length `D`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.side + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.side + col] = value;
    }

    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.side + col] += value;
    }

    /// Borrow one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.side;
        &self.data[start..start + self.side]
    }

    /// Borrow one row mutably.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let start = row * self.side;
        &mut self.data[start..start + self.side]
    }

    /// Whole backing storage in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Copy with every row reversed (column `c` → `D-1-c`). Feeds the
    /// left-leaning orientation pass of the detector.
    pub fn mirrored(&self) -> Grid {
        let mut out = self.clone();
        for r in 0..self.side {
            out.row_mut(r).reverse();
        }
        out
    }

    /// Location and value of the maximum cell, scanning row-major and keeping
    /// the first encountered maximum (strict `>`). An all-zero grid therefore
    /// reports `(0, 0)`.
    pub fn argmax(&self) -> (usize, usize, f32) {
        let mut best = self.data[0];
        let mut best_idx = 0usize;
        for (i, &v) in self.data.iter().enumerate() {
            if v > best {
                best = v;
                best_idx = i;
            }
        }
        (best_idx / self.side, best_idx % self.side, best)
    }
}

/// The transform's single primitive mutator:
/// `dst[c] = a[c] + b[(c + shift) mod width]`, where `width` is the length
/// of `b`. Wrapping modulo anything other than the row width would silently
/// corrupt every later merge level.
pub fn add_shifted(dst: &mut [f32], a: &[f32], b: &[f32], shift: usize) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    let width = b.len();
    for (c, out) in dst.iter_mut().enumerate() {
        *out = a[c] + b[(c + shift) % width];
    }
}
