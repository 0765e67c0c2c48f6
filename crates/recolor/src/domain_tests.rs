//! Domain-critical regression tests for recolor.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{Lab, Srgb};
    use crate::engine::recolor_image;
    use crate::palette::{Palette, PaletteError};
    use image::{Rgba, RgbaImage};

    fn black_and_white() -> Palette {
        Palette::from_entries(&["#000000", "#FFFFFF"]).unwrap()
    }

    /// Deterministic pseudo-random RGBA grid for determinism checks.
    fn noise_image(width: u32, height: u32) -> RgbaImage {
        let mut state = 0x2545_f491u32;
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            let mut channel = || {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            };
            *pixel = Rgba([channel(), channel(), channel(), channel()]);
        }
        image
    }

    // ========================================================================
    // Hex validation -- the whole code must be checked, not a prefix
    // ========================================================================

    /// If this breaks, it means: color-code validation regressed to checking
    /// only a prefix of the string. The first characters of these codes are
    /// valid hex digits; the invalid character sits later in the code.
    #[test]
    fn test_invalid_digit_after_valid_prefix_is_rejected() {
        for entry in ["2e34g0", "2e344g", "abcdeZ", "#2e34g0"] {
            let result = Palette::from_entries(&[entry]);
            assert!(
                matches!(result, Err(PaletteError::InvalidColorCode { .. })),
                "entry {entry:?} must fail palette loading, got {result:?}"
            );
        }
    }

    // ========================================================================
    // Gamma correctness -- matching must happen in Lab, after linearization
    // ========================================================================

    /// If this breaks, it means: the distance engine is comparing raw sRGB
    /// bytes. Byte 123 is nearer to 0 than to 255 numerically, but its
    /// lightness (~51.6) is past the perceptual midpoint, so the correct
    /// match against a black/white palette is white.
    #[test]
    fn test_midtone_matches_perceptually_not_numerically() {
        let palette = black_and_white();
        assert_eq!(
            palette.nearest(Srgb::new(123, 123, 123)),
            Srgb::new(255, 255, 255)
        );
    }

    /// If this breaks, it means: the linearization stage was skipped and
    /// normalized sRGB values are fed straight into the XYZ matrix. With
    /// correct inverse companding, byte 80 has lightness ~34 and matches
    /// black; without it, its apparent lightness (~63) would match white.
    #[test]
    fn test_linearization_is_not_skipped() {
        let palette = black_and_white();
        assert_eq!(palette.nearest(Srgb::new(80, 80, 80)), Srgb::new(0, 0, 0));
    }

    /// If this breaks, it means: the D65 white scaling was dropped from the
    /// Lab conversion. Neutral grays then pick up a phantom chroma
    /// (a ~ -8, b ~ -6 for white), which skews every match near the
    /// achromatic axis.
    #[test]
    fn test_neutral_grays_stay_neutral() {
        for value in [0u8, 64, 128, 192, 255] {
            let lab = Lab::from(Srgb::new(value, value, value));
            assert!(
                lab.a.abs() < 0.01 && lab.b.abs() < 0.01,
                "gray {value} drifted to a={}, b={}",
                lab.a,
                lab.b
            );
        }
    }

    // ========================================================================
    // Concurrency -- parallelism must never be observable in the output
    // ========================================================================

    /// If this breaks, it means: workers are no longer writing disjoint
    /// row slices (or the partitioning depends on scheduling), so the
    /// output varies with the worker count.
    #[test]
    fn test_worker_count_does_not_change_output() {
        let palette = Palette::from_entries(&["#2E3440", "#BF616A", "#A3BE8C", "#ECEFF4"]).unwrap();
        let input = noise_image(64, 48);

        let serial = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| recolor_image(&input, &palette));
        let parallel = rayon::ThreadPoolBuilder::new()
            .num_threads(8)
            .build()
            .unwrap()
            .install(|| recolor_image(&input, &palette));

        assert_eq!(
            serial.as_raw(),
            parallel.as_raw(),
            "1-worker and 8-worker outputs must be byte-identical"
        );
    }

    /// If this breaks, it means: `nearest` stopped being the identity on
    /// palette members (or alpha handling mutates pixels), so recoloring is
    /// no longer idempotent on an already-palettized image.
    #[test]
    fn test_recoloring_is_idempotent_on_palettized_input() {
        let palette = Palette::from_entries(&["#2E3440", "#BF616A", "#A3BE8C", "#ECEFF4"]).unwrap();
        let once = recolor_image(&noise_image(32, 32), &palette);
        let twice = recolor_image(&once, &palette);
        assert_eq!(once.as_raw(), twice.as_raw());
    }
}
