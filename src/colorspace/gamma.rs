//! sRGB companding: piecewise gamma decode/encode.
//!
//! The byte-input decode path is a 256-entry table. The table is an explicit
//! value handed to whoever needs it rather than a hidden global; `shared()`
//! offers the compute-once process-wide instance for callers that do not
//! want to own one.

use std::sync::OnceLock;

/// Precomputed sRGB → linear lookup for 8-bit channels.
#[derive(Clone, Debug)]
pub struct GammaTable {
    table: [f32; 256],
}

impl GammaTable {
    pub fn new() -> Self {
        let mut table = [0.0f32; 256];
        for (byte, slot) in table.iter_mut().enumerate() {
            *slot = decode_f64(byte as f64 / 255.0) as f32;
        }
        Self { table }
    }

    /// Linear value in `[0, 1]` for one sRGB byte channel.
    #[inline]
    pub fn decode(&self, byte: u8) -> f32 {
        self.table[byte as usize]
    }

    /// Process-wide immutable instance, built on first use. Safe for
    /// concurrent readers once initialized.
    pub fn shared() -> &'static GammaTable {
        static SHARED: OnceLock<GammaTable> = OnceLock::new();
        SHARED.get_or_init(GammaTable::new)
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_f64(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse sRGB companding for a continuous channel value in `[0, 1]`.
#[inline]
pub fn decode_gamma(srgb: f32) -> f32 {
    decode_f64(srgb as f64) as f32
}

/// sRGB companding of a linear channel value.
#[inline]
pub fn encode_gamma(linear: f32) -> f32 {
    let v = linear as f64;
    let encoded = if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    encoded as f32
}

#[cfg(test)]
mod tests {
    use super::{decode_gamma, encode_gamma, GammaTable};
    use approx::assert_abs_diff_eq;

    #[test]
    fn byte_round_trip_over_the_whole_table() {
        let table = GammaTable::new();
        for byte in 0u16..=255 {
            let byte = byte as u8;
            let back = encode_gamma(table.decode(byte));
            assert_abs_diff_eq!(back, byte as f32 / 255.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn table_matches_the_continuous_path() {
        let table = GammaTable::new();
        for byte in [0u8, 1, 10, 128, 250, 255] {
            assert_abs_diff_eq!(
                table.decode(byte),
                decode_gamma(byte as f32 / 255.0),
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn breakpoints_are_continuous() {
        assert_abs_diff_eq!(
            decode_gamma(0.04045),
            decode_gamma(0.040451),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            encode_gamma(0.0031308),
            encode_gamma(0.0031309),
            epsilon = 1e-5
        );
    }

    #[test]
    fn shared_table_is_the_same_instance() {
        let a = GammaTable::shared() as *const _;
        let b = GammaTable::shared() as *const _;
        assert_eq!(a, b);
    }
}
