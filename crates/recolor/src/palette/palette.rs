//! Palette model with nearest-color matching.
//!
//! A `Palette` is the validated, ordered, non-empty list of target colors
//! every pixel gets mapped onto. It is constructed once from textual hex
//! entries and read-only for the remainder of the run.

use tracing::debug;

use super::error::PaletteError;
use crate::color::{distance_squared, Srgb};

/// An ordered, non-empty list of target colors.
///
/// Entry order is preserved and significant: when two entries are equally
/// close to a pixel, the one that appears first in the palette wins.
/// Duplicate entries are permitted.
///
/// # Example
///
/// ```
/// use recolor::Palette;
///
/// let palette = Palette::from_entries(&["#2E3440", "#ECEFF4"]).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Create a palette from already-decoded colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from raw textual hex entries, in input order.
    ///
    /// Each entry is trimmed, case-folded to lowercase, and parsed as a hex
    /// color code (`RRGGBB`, optionally with one leading `#`). The whole
    /// code must consist of hex digits; partial matches are rejected.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InvalidColorCode`] for the first entry that fails
    ///   to parse, carrying the offending text.
    /// - [`PaletteError::EmptyPalette`] if there are no entries.
    ///
    /// # Example
    ///
    /// ```
    /// use recolor::{Palette, Srgb};
    ///
    /// let palette = Palette::from_entries(&["#2E3440", "3b4252"]).unwrap();
    /// assert_eq!(palette.colors()[0], Srgb::new(46, 52, 64));
    /// ```
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        let mut colors = Vec::with_capacity(entries.len());
        for entry in entries {
            let code = entry.as_ref().trim().to_lowercase();
            let color = code
                .parse::<Srgb>()
                .map_err(|source| PaletteError::InvalidColorCode {
                    code: code.clone(),
                    source,
                })?;
            colors.push(color);
        }

        let palette = Self::new(colors)?;
        debug!(colors = palette.len(), "palette constructed");
        Ok(palette)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false` in practice: empty palettes are rejected at
    /// construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette colors in original order.
    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Find the palette color nearest to `pixel` in perceptual distance.
    ///
    /// Linear scan over the palette; ties resolve to the first minimal
    /// entry in palette order (strictly-less-than replacement). Total for
    /// every input since palettes are non-empty by construction.
    ///
    /// # Example
    ///
    /// ```
    /// use recolor::{Palette, Srgb};
    ///
    /// let palette = Palette::from_entries(&["#2E3440", "#ECEFF4"]).unwrap();
    /// assert_eq!(
    ///     palette.nearest(Srgb::new(255, 255, 255)),
    ///     Srgb::new(236, 239, 244)
    /// );
    /// ```
    pub fn nearest(&self, pixel: Srgb) -> Srgb {
        let mut best = self.colors[0];
        let mut best_distance = distance_squared(pixel, best);

        for &candidate in &self.colors[1..] {
            let distance = distance_squared(pixel, candidate);
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }

        best
    }
}
