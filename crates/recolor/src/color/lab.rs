//! CIE L*a*b* perceptual color space
//!
//! Lab is the space the distance engine works in: Euclidean distance between
//! Lab coordinates approximates perceived color difference far better than
//! distance between raw RGB bytes. Coordinates are adapted to the D65
//! reference white before the Lab nonlinearity is applied.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::Xyz;

/// D65 reference white tristimulus values (2° observer).
const D65_WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// A color in CIE L*a*b* space, D65-adapted.
///
/// # Components
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
///
/// Lab triples are ephemeral intermediates: they are derived on demand from
/// [`Srgb`] values and never stored in the palette or the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance to another Lab color.
    ///
    /// Squared (not rooted) distances preserve ordering, which is all the
    /// nearest-color search needs.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

/// The Lab nonlinearity applied to white-scaled tristimulus values.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_WHITE.x);
        let fy = lab_f(xyz.y / D65_WHITE.y);
        let fz = lab_f(xyz.z / D65_WHITE.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Xyz::from(rgb).into()
    }
}

impl From<Srgb> for Lab {
    fn from(srgb: Srgb) -> Self {
        Xyz::from(srgb).into()
    }
}

/// Perceptual squared distance between two device colors.
///
/// Both colors run through the identical sRGB → linear → XYZ → D65 Lab
/// pipeline before differencing. Non-negative and symmetric; zero exactly
/// for byte-identical inputs. Only the relative ordering of results is
/// meaningful.
#[inline]
pub fn distance_squared(a: Srgb, b: Srgb) -> f32 {
    Lab::from(a).distance_squared(Lab::from(b))
}
