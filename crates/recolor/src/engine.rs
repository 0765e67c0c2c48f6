//! Row-parallel recolor engine.
//!
//! Partitions the pixel grid by row and maps every pixel onto its nearest
//! palette color on a bounded worker pool. Rows are shared-nothing: each
//! worker reads one row of the input and owns the matching row slice of the
//! output, so no synchronization exists anywhere in per-pixel work and the
//! result is bit-identical regardless of worker count.

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::color::Srgb;
use crate::palette::Palette;

/// Bytes per pixel in the RGBA grid.
const CHANNELS: usize = 4;

/// Recolor an image by mapping every pixel to its nearest palette color.
///
/// The output grid has the same dimensions as the input. Nearest-color
/// resolution uses the RGB channels only; each pixel's alpha passes through
/// unchanged. Rows execute on the ambient rayon pool, which bounds the
/// number of concurrently running rows to the pool size (the host's
/// available parallelism unless the caller installed a custom pool); the
/// call returns only after every row has completed.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use recolor::{recolor_image, Palette};
///
/// let palette = Palette::from_entries(&["#2E3440", "#ECEFF4"]).unwrap();
/// let mut input = RgbaImage::new(2, 1);
/// input.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
/// input.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
///
/// let output = recolor_image(&input, &palette);
/// assert_eq!(output.get_pixel(0, 0), &Rgba([236, 239, 244, 255]));
/// assert_eq!(output.get_pixel(1, 0), &Rgba([46, 52, 64, 255]));
/// ```
pub fn recolor_image(input: &RgbaImage, palette: &Palette) -> RgbaImage {
    let (width, height) = input.dimensions();
    let mut output = RgbaImage::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    debug!(width, height, colors = palette.len(), "recoloring image");

    let stride = width as usize * CHANNELS;
    output
        .par_chunks_exact_mut(stride)
        .zip(input.par_chunks_exact(stride))
        .for_each(|(out_row, in_row)| recolor_row(in_row, out_row, palette));

    output
}

/// Map one row of pixels; the unit of work the pool schedules.
fn recolor_row(in_row: &[u8], out_row: &mut [u8], palette: &Palette) {
    for (src, dst) in in_row
        .chunks_exact(CHANNELS)
        .zip(out_row.chunks_exact_mut(CHANNELS))
    {
        let mapped = palette.nearest(Srgb::new(src[0], src[1], src[2]));
        dst[0] = mapped.r;
        dst[1] = mapped.g;
        dst[2] = mapped.b;
        dst[3] = src[3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    fn two_tone_palette() -> Palette {
        Palette::from_entries(&["#2E3440", "#ECEFF4"]).unwrap()
    }

    #[test]
    fn maps_white_and_black_to_palette_extremes() {
        let mut input = RgbaImage::new(2, 1);
        input.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        input.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

        let output = recolor_image(&input, &two_tone_palette());

        assert_eq!(output.get_pixel(0, 0), &Rgba([236, 239, 244, 255]));
        assert_eq!(output.get_pixel(1, 0), &Rgba([46, 52, 64, 255]));
    }

    #[test]
    fn alpha_passes_through_unchanged() {
        let mut input = RgbaImage::new(2, 2);
        input.put_pixel(0, 0, Rgba([255, 0, 0, 0]));
        input.put_pixel(1, 0, Rgba([0, 255, 0, 17]));
        input.put_pixel(0, 1, Rgba([0, 0, 255, 128]));
        input.put_pixel(1, 1, Rgba([255, 255, 255, 255]));

        let output = recolor_image(&input, &two_tone_palette());

        for (x, y, alpha) in [(0, 0, 0), (1, 0, 17), (0, 1, 128), (1, 1, 255)] {
            assert_eq!(output.get_pixel(x, y)[3], alpha, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn output_dimensions_match_input() {
        let input = RgbaImage::new(7, 3);
        let output = recolor_image(&input, &two_tone_palette());
        assert_eq!(output.dimensions(), (7, 3));
    }

    #[test]
    fn degenerate_grids_yield_empty_output() {
        for (w, h) in [(0, 0), (0, 4), (4, 0)] {
            let input = RgbaImage::new(w, h);
            let output = recolor_image(&input, &two_tone_palette());
            assert_eq!(output.dimensions(), (w, h));
        }
    }

    #[test]
    fn single_color_palette_floods_the_grid() {
        let palette = Palette::from_entries(&["#BF616A"]).unwrap();
        let mut input = RgbaImage::new(3, 3);
        for (i, pixel) in input.pixels_mut().enumerate() {
            *pixel = Rgba([i as u8 * 20, 255 - i as u8 * 20, i as u8, 200]);
        }

        let output = recolor_image(&input, &palette);
        for pixel in output.pixels() {
            assert_eq!(pixel, &Rgba([191, 97, 106, 200]));
        }
    }
}
