//! repalette - recolor raster images to a fixed palette
//!
//! Collaborator layer around the `recolor` core: palette source resolution,
//! image decode/encode, and the file-level recolor job. This library exposes
//! modules for integration testing.

pub mod error;
pub mod job;
pub mod palettes;

pub use error::AppError;
