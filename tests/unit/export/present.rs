use super::*;

const BG: Rgba8 = Rgba8::opaque(40, 40, 40);

#[test]
fn square_into_square_fills_display() {
    let s = PixelSurface::filled(600, 600, Rgba8::opaque(255, 0, 0)).unwrap();
    let out = fit_contain(&s, 300, 300, BG).unwrap();
    assert_eq!(out.dimensions(), (300, 300));
    assert_eq!(out.pixel(0, 0), Rgba8::opaque(255, 0, 0));
    assert_eq!(out.pixel(299, 299), Rgba8::opaque(255, 0, 0));
}

#[test]
fn tall_image_is_pillarboxed() {
    let s = PixelSurface::filled(200, 600, Rgba8::opaque(0, 0, 255)).unwrap();
    let out = fit_contain(&s, 300, 300, BG).unwrap();
    // 100x300 centered at x = 100
    assert_eq!(out.pixel(50, 150), BG);
    assert_eq!(out.pixel(100, 150), Rgba8::opaque(0, 0, 255));
    assert_eq!(out.pixel(199, 150), Rgba8::opaque(0, 0, 255));
    assert_eq!(out.pixel(200, 150), BG);
}

#[test]
fn upscale_keeps_hard_block_edges() {
    let mut s = PixelSurface::new(2, 1).unwrap();
    s.put_pixel(0, 0, Rgba8::opaque(255, 255, 255));
    s.put_pixel(1, 0, Rgba8::opaque(0, 0, 0));
    let out = fit_contain(&s, 8, 4, BG).unwrap();
    assert_eq!(out.dimensions(), (8, 4));
    assert_eq!(out.pixel(1, 1), Rgba8::opaque(255, 255, 255));
    assert_eq!(out.pixel(6, 2), Rgba8::opaque(0, 0, 0));
}

#[test]
fn transparent_pixels_show_background() {
    let s = PixelSurface::new(4, 4).unwrap();
    let out = fit_contain(&s, 4, 4, BG).unwrap();
    assert!(out.data().chunks_exact(4).all(|px| px == BG.to_array()));
}

#[test]
fn zero_display_is_surface_error() {
    let s = PixelSurface::new(4, 4).unwrap();
    assert!(fit_contain(&s, 0, 10, BG).is_err());
}
