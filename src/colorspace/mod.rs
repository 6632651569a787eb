//! Colour-space collaborators: sRGB companding and the orthonormal
//! lightness/chroma basis the histograms are built in.

mod basis;
mod gamma;

pub use basis::{
    axis_to_rgb, rgb_to_axis, to_axis_basis, ALPHA_AXIS_LEN, BETA_AXIS_LEN, L_AXIS_LEN,
};
pub use gamma::{decode_gamma, encode_gamma, GammaTable};
