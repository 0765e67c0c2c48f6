//! Error types for palette construction
//!
//! Content-validation failures only; locating and reading a palette source
//! is a collaborator concern with its own error taxonomy.

use thiserror::Error;

/// Error type for parsing a single hex color code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// The code is not exactly 6 hex digits after stripping one leading `#`.
    #[error("expected exactly 6 hex digits")]
    InvalidLength,
    /// A non-hex character appeared somewhere in the code.
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}

/// Error type for palette construction from raw text entries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// An entry is not a valid hex color code. Carries the offending text
    /// as handed to the parser (trimmed and lowercased).
    #[error("invalid color code {code:?}")]
    InvalidColorCode {
        code: String,
        #[source]
        source: ParseColorError,
    },
    /// The source yielded no usable entries.
    #[error("palette has no colors")]
    EmptyPalette,
}
