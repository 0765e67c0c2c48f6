//! Linear RGB color type
//!
//! Linear RGB is the color space where channel values are proportional to
//! physical light intensity. It is the first derived stage of the distance
//! pipeline; the XYZ transform below it is only valid on linear values.

use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Obtained from [`Srgb`] by normalizing each channel to `0.0..=1.0` and
/// removing the sRGB gamma encoding (inverse companding, IEC 61966-2-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity, 0.0..=1.0)
    pub r: f32,
    /// Green channel (linear light intensity, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (linear light intensity, 0.0..=1.0)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from already-linear values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Inverse sRGB companding for one normalized channel.
///
/// Values at or below 0.04045 sit on the linear toe segment; the rest follow
/// the 2.4-exponent power curve.
#[inline]
fn linearize(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: linearize(f32::from(srgb.r) / 255.0),
            g: linearize(f32::from(srgb.g) / 255.0),
            b: linearize(f32::from(srgb.b) / 255.0),
        }
    }
}
