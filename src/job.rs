//! File-level recolor job
//!
//! Wraps the core engine with the external collaborators: pre-flight path
//! checks, raster decoding into an RGBA grid, and PNG encoding of the
//! result. All boundary checks run before any decode or worker dispatch, so
//! a failed run never leaves a partially-written destination.

use std::path::Path;

use image::ImageFormat;
use recolor::{recolor_image, Palette};
use tracing::info;

use crate::error::AppError;

/// Recolor the raster image at `input` into a new PNG at `output`.
///
/// Pre-flight checks, in order: the input must exist, and the output must
/// not (a deliberate no-clobber policy). The input may be any raster format
/// the decoder understands; the output is always written as RGBA PNG.
///
/// # Errors
///
/// - [`AppError::SourceNotFound`] / [`AppError::SourceUnreadable`] for a
///   missing or undecodable input.
/// - [`AppError::DestinationExists`] if `output` is already present,
///   checked before any allocation or worker dispatch.
/// - [`AppError::DestinationUnwritable`] if the output cannot be created
///   or encoded.
pub fn recolor_file(input: &Path, output: &Path, palette: &Palette) -> Result<(), AppError> {
    if !input.exists() {
        return Err(AppError::SourceNotFound {
            path: input.to_path_buf(),
        });
    }
    if output.exists() {
        return Err(AppError::DestinationExists {
            path: output.to_path_buf(),
        });
    }

    let decoded = image::open(input).map_err(|source| AppError::SourceUnreadable {
        path: input.to_path_buf(),
        source,
    })?;
    let grid = decoded.to_rgba8();
    info!(
        width = grid.width(),
        height = grid.height(),
        colors = palette.len(),
        "recoloring image"
    );

    let recolored = recolor_image(&grid, palette);

    recolored
        .save_with_format(output, ImageFormat::Png)
        .map_err(|source| AppError::DestinationUnwritable {
            path: output.to_path_buf(),
            source,
        })?;
    info!(output = %output.display(), "wrote recolored image");
    Ok(())
}
