//! recolor: palette-constrained image recoloring
//!
//! This library replaces every pixel of a raster image with the closest
//! color from a small fixed palette, producing a stylized output image.
//! Closeness is perceptual: colors are compared by Euclidean distance in
//! CIE L*a*b* after D65 adaptation, not by raw RGB distance.
//!
//! # Quick Start
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use recolor::{recolor_image, Palette};
//!
//! let palette = Palette::from_entries(&["#2E3440", "#ECEFF4"]).unwrap();
//!
//! let mut input = RgbaImage::new(2, 1);
//! input.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
//! input.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
//!
//! let output = recolor_image(&input, &palette);
//! assert_eq!(output.get_pixel(0, 0), &Rgba([236, 239, 244, 255]));
//! ```
//!
//! # Color Science
//!
//! Matching in raw RGB space picks visibly wrong palette entries for
//! mid-tones because sRGB bytes are gamma-encoded: equal byte differences
//! do not correspond to equal perceived differences. The distance engine
//! therefore runs every color through the full conversion pipeline before
//! differencing:
//!
//! | Stage | Space | Transform |
//! |-------|-------|-----------|
//! | 1 | [`Srgb`] | normalize bytes to `0.0..=1.0` |
//! | 2 | [`LinearRgb`] | inverse sRGB companding |
//! | 3 | [`Xyz`] | sRGB → XYZ matrix (D65 primaries) |
//! | 4 | [`Lab`] | D65 white scaling + Lab nonlinearity |
//!
//! No stage may be skipped: dropping linearization or the D65 scaling
//! changes which palette entry wins for borderline pixels.
//!
//! # Concurrency
//!
//! [`recolor_image`] partitions the grid by row and runs rows on a bounded
//! rayon pool. Rows write disjoint slices of the output, so concurrency is
//! purely a performance device: the output is bit-identical for any worker
//! count.

pub mod color;
mod engine;
pub mod palette;

mod domain_tests;

pub use color::{distance_squared, Lab, LinearRgb, Srgb, Xyz};
pub use engine::recolor_image;
pub use palette::{Palette, PaletteError, ParseColorError};
