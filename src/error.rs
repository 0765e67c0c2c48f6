use std::path::PathBuf;

use recolor::PaletteError;
use thiserror::Error;

/// Application-level error taxonomy.
///
/// Every variant is terminal and carries the offending identifier or path;
/// the CLI surfaces the diagnostic text and exits non-zero. Palette-stage
/// and image-stage variants are kept distinct because they originate at
/// different collaborator boundaries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("palette {name:?} not found")]
    PaletteNotFound { name: String },

    #[error("unable to read palette {name:?}: {reason}")]
    PaletteUnreadable { name: String, reason: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("image {} not found", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("unable to read image {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} already exists", path.display())]
    DestinationExists { path: PathBuf },

    #[error("unable to create image {}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
