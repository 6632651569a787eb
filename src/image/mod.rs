//! Interleaved RGB image buffers.
//!
//! A borrowed 8-bit view for ingestion and an owned f32 buffer for the
//! corrected result. Strides count pixels, not bytes.

pub mod io;

use nalgebra::Vector3;

use crate::colorspace::GammaTable;

/// Borrowed interleaved 8-bit RGB view.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageU8<'a> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Pixels between consecutive rows (equals `w` when tightly packed)
    pub stride: usize,
    /// Interleaved RGB bytes, `3 * stride * h` long
    pub data: &'a [u8],
}

impl RgbImageU8<'_> {
    /// Decode the whole image into a flat linear-RGB cloud, row-major.
    pub fn to_linear_cloud(&self, gamma: &GammaTable) -> Vec<Vector3<f32>> {
        let mut cloud = Vec::with_capacity(self.w * self.h);
        for y in 0..self.h {
            let row = &self.data[3 * y * self.stride..];
            for x in 0..self.w {
                let px = &row[3 * x..3 * x + 3];
                cloud.push(Vector3::new(
                    gamma.decode(px[0]),
                    gamma.decode(px[1]),
                    gamma.decode(px[2]),
                ));
            }
        }
        cloud
    }
}

/// Owned interleaved f32 RGB image (tightly packed).
#[derive(Clone, Debug)]
pub struct RgbImageF32 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<f32>,
}

impl RgbImageF32 {
    /// Assemble from a row-major pixel cloud.
    pub fn from_cloud(w: usize, h: usize, cloud: &[Vector3<f32>]) -> Self {
        assert_eq!(cloud.len(), w * h, "cloud size does not match dimensions");
        let mut data = Vec::with_capacity(3 * w * h);
        for p in cloud {
            data.extend_from_slice(&[p.x, p.y, p.z]);
        }
        Self { w, h, data }
    }

    /// Channel triple at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        let i = 3 * (y * self.w + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
