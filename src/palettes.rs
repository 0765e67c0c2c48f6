//! Palette source resolution with embedded fallbacks
//!
//! Palettes are JSON files holding an array of hex color codes. A small set
//! of built-in palettes is compiled into the binary; a `palettes/` directory
//! next to the working directory (or the directory named by
//! `REPALETTE_PALETTES_DIR`) overrides built-ins file by file.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::PathBuf;

use recolor::Palette;
use rust_embed::RustEmbed;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;

/// Built-in palettes compiled into the binary.
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.json"]
struct EmbeddedPalettes;

/// Palette used when the CLI is given none.
pub const DEFAULT_PALETTE: &str = "nord";

/// Environment variable overriding the on-disk palette directory.
pub const PALETTES_DIR_VAR: &str = "REPALETTE_PALETTES_DIR";

/// On-disk palette file layout: a JSON array of hex color codes.
#[derive(Deserialize)]
#[serde(transparent)]
struct PaletteFile(Vec<String>);

/// Resolves palette identifiers to validated [`Palette`] values.
///
/// Lookup order for a name: `<dir>/<name>.json` on disk, then the embedded
/// built-in of the same name. A file that exists but cannot be read or
/// parsed is an error, never a silent fallback.
pub struct PaletteStore {
    dir: PathBuf,
}

impl PaletteStore {
    /// Create a store using the default directory (`palettes/`, or the
    /// directory named by `REPALETTE_PALETTES_DIR` when set).
    pub fn new() -> Self {
        let dir = env::var(PALETTES_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("palettes"));
        Self { dir }
    }

    /// Create a store reading overrides from an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load and validate the palette with the given identifier.
    ///
    /// # Errors
    ///
    /// - [`AppError::PaletteNotFound`] if no source with that name exists.
    /// - [`AppError::PaletteUnreadable`] if a source exists but is not a
    ///   readable JSON array of strings.
    /// - [`AppError::Palette`] for content failures (invalid color code,
    ///   empty palette).
    pub fn load(&self, name: &str) -> Result<Palette, AppError> {
        let entries = self.read_entries(name)?;
        let palette = Palette::from_entries(&entries)?;
        Ok(palette)
    }

    /// Names of every loadable palette: built-ins plus on-disk files,
    /// sorted and deduplicated.
    pub fn available(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = EmbeddedPalettes::iter()
            .filter_map(|file| Some(file.strip_suffix(".json")?.to_string()))
            .collect();

        if let Ok(dir) = fs::read_dir(&self.dir) {
            for entry in dir.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.insert(stem.to_string());
                    }
                }
            }
        }

        names.into_iter().collect()
    }

    /// Fetch the raw text entries for a palette, resolving the source.
    fn read_entries(&self, name: &str) -> Result<Vec<String>, AppError> {
        let path = self.dir.join(format!("{name}.json"));
        let data: Cow<'static, [u8]> = if path.is_file() {
            debug!(path = %path.display(), "loading palette from filesystem");
            fs::read(&path)
                .map_err(|e| AppError::PaletteUnreadable {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?
                .into()
        } else if let Some(file) = EmbeddedPalettes::get(&format!("{name}.json")) {
            debug!(name, "loading embedded palette");
            file.data
        } else {
            return Err(AppError::PaletteNotFound {
                name: name.to_string(),
            });
        };

        let PaletteFile(entries) =
            serde_json::from_slice(&data).map_err(|e| AppError::PaletteUnreadable {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(entries)
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new()
    }
}
