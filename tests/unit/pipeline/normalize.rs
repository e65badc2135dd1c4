use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn large_sources_pass_through() {
    assert_eq!(normalized_dimensions(600, 600, 600), (600, 600));
    assert_eq!(normalized_dimensions(1920, 1080, 600), (1920, 1080));
}

#[test]
fn small_square_upscales_to_min() {
    assert_eq!(normalized_dimensions(500, 500, 600), (600, 600));
    assert_eq!(normalized_dimensions(1, 1, 600), (600, 600));
}

#[test]
fn wide_source_pins_width() {
    assert_eq!(normalized_dimensions(400, 200, 600), (600, 300));
    // 600 / (640/480) = 450
    assert_eq!(normalized_dimensions(640, 480, 600), (600, 450));
    // 600 / (700/300) = 257.14 -> 257
    assert_eq!(normalized_dimensions(700, 300, 600), (600, 257));
}

#[test]
fn tall_source_pins_height() {
    assert_eq!(normalized_dimensions(300, 900, 600), (200, 600));
    // 600 * (100/700) = 85.71 -> 86
    assert_eq!(normalized_dimensions(100, 700, 600), (86, 600));
}

#[test]
fn extreme_ratio_never_yields_zero() {
    assert_eq!(normalized_dimensions(10_000, 1, 600), (600, 1));
    assert_eq!(normalized_dimensions(1, 10_000, 600), (1, 600));
}

#[test]
fn pass_through_borrows() {
    let src = PixelSurface::filled(8, 8, Rgba8::opaque(1, 2, 3)).unwrap();
    let out = normalize(&src, 4, Interpolation::Bilinear).unwrap();
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out.dimensions(), (8, 8));
}

#[test]
fn uniform_source_stays_uniform_after_upscale() {
    let red = Rgba8::opaque(255, 0, 0);
    let src = PixelSurface::filled(50, 50, red).unwrap();
    for interp in [Interpolation::Nearest, Interpolation::Bilinear] {
        let out = normalize(&src, 60, interp).unwrap();
        assert_eq!(out.dimensions(), (60, 60));
        assert!(out.data().chunks_exact(4).all(|px| px == red.to_array()));
    }
}

#[test]
fn nearest_upscale_replicates_pixels() {
    let mut src = PixelSurface::new(2, 1).unwrap();
    src.put_pixel(0, 0, Rgba8::opaque(255, 0, 0));
    src.put_pixel(1, 0, Rgba8::opaque(0, 0, 255));
    let out = normalize(&src, 4, Interpolation::Nearest).unwrap();
    assert_eq!(out.dimensions(), (4, 2));
    assert_eq!(out.pixel(0, 0), Rgba8::opaque(255, 0, 0));
    assert_eq!(out.pixel(3, 1), Rgba8::opaque(0, 0, 255));
}
