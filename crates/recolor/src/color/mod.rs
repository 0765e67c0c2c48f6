//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time
//! distinction between the stages of the sRGB → Lab conversion pipeline.
//!
//! # Color Spaces
//!
//! - **Srgb**: 8-bit device color as stored in image files. Use for I/O.
//! - **LinearRgb**: linear light intensity after inverse sRGB companding.
//! - **Xyz**: CIE 1931 tristimulus values (D65-referenced primaries).
//! - **Lab**: CIE L*a*b* adapted to the D65 reference white; Euclidean
//!   distance here approximates perceived color difference.
//!
//! # Example
//!
//! ```
//! use recolor::{Lab, Srgb};
//!
//! let night: Srgb = "#2E3440".parse().unwrap();
//! let snow: Srgb = "#ECEFF4".parse().unwrap();
//!
//! let d = Lab::from(night).distance_squared(Lab::from(snow));
//! assert!(d > 0.0);
//! ```

mod lab;
mod linear_rgb;
mod srgb;
mod xyz;

pub use lab::{distance_squared, Lab};
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
pub use xyz::Xyz;
