use super::*;
use crate::pipeline::align::align_grid;

fn checker(w: u32, h: u32, a: Rgba8, b: Rgba8) -> PixelSurface {
    let mut s = PixelSurface::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            s.put_pixel(x, y, if (x + y) % 2 == 0 { a } else { b });
        }
    }
    s
}

#[test]
fn uniform_block_averages_to_itself() {
    let c = Rgba8::new(12, 34, 56, 200);
    let s = PixelSurface::filled(5, 5, c).unwrap();
    assert_eq!(sample_block(&s, 0, 0, 5, 5), Some(c));
}

#[test]
fn transparent_samples_do_not_dilute_color() {
    let c = Rgba8::opaque(200, 100, 50);
    let s = checker(4, 4, c, Rgba8::transparent());
    assert_eq!(sample_block(&s, 0, 0, 4, 4), Some(c));
}

#[test]
fn transparent_rgb_is_ignored_even_when_nonzero() {
    let c = Rgba8::opaque(10, 10, 10);
    let s = checker(2, 2, c, Rgba8::new(255, 255, 255, 0));
    assert_eq!(sample_block(&s, 0, 0, 2, 2), Some(c));
}

#[test]
fn all_transparent_block_is_none() {
    let s = PixelSurface::new(3, 3).unwrap();
    assert_eq!(sample_block(&s, 0, 0, 3, 3), None);
}

#[test]
fn mean_rounds_half_up() {
    let mut s = PixelSurface::new(2, 1).unwrap();
    s.put_pixel(0, 0, Rgba8::new(0, 1, 254, 255));
    s.put_pixel(1, 0, Rgba8::new(1, 2, 255, 254));
    // 0.5 -> 1, 1.5 -> 2, 254.5 -> 255, 254.5 -> 255
    assert_eq!(sample_block(&s, 0, 0, 2, 1), Some(Rgba8::new(1, 2, 255, 255)));
}

#[test]
fn alpha_is_averaged_over_visible_samples() {
    let mut s = PixelSurface::new(3, 1).unwrap();
    s.put_pixel(0, 0, Rgba8::new(100, 100, 100, 255));
    s.put_pixel(1, 0, Rgba8::new(100, 100, 100, 1));
    assert_eq!(sample_block(&s, 0, 0, 3, 1), Some(Rgba8::new(100, 100, 100, 128)));
}

#[test]
fn region_is_clipped_to_surface() {
    let s = PixelSurface::filled(3, 3, Rgba8::opaque(9, 9, 9)).unwrap();
    assert_eq!(sample_block(&s, 2, 2, 10, 10), Some(Rgba8::opaque(9, 9, 9)));
}

#[test]
fn blocks_are_row_major_with_trailing_partials() {
    let s = PixelSurface::filled(25, 12, Rgba8::opaque(1, 1, 1)).unwrap();
    let blocks = sample_blocks(&s, align_grid(25, 12, 10, false), 10);
    let rects: Vec<_> = blocks
        .iter()
        .map(|b| (b.x, b.y, b.sample_width, b.sample_height))
        .collect();
    assert_eq!(
        rects,
        vec![
            (0, 0, 10, 10),
            (10, 0, 10, 10),
            (20, 0, 5, 10),
            (0, 10, 10, 2),
            (10, 10, 10, 2),
            (20, 10, 5, 2),
        ]
    );
}

#[test]
fn aligned_extent_never_reads_remainder() {
    let mut s = PixelSurface::filled(15, 15, Rgba8::opaque(0, 0, 255)).unwrap();
    for i in 0..15 {
        s.put_pixel(14, i, Rgba8::opaque(255, 0, 0));
        s.put_pixel(i, 14, Rgba8::opaque(255, 0, 0));
    }
    let blocks = sample_blocks(&s, align_grid(15, 15, 7, true), 7);
    assert_eq!(blocks.len(), 4);
    assert!(blocks.iter().all(|b| b.color == Rgba8::opaque(0, 0, 255)));
}

#[test]
fn transparent_blocks_are_not_emitted() {
    let mut s = PixelSurface::new(4, 2).unwrap();
    s.put_pixel(3, 1, Rgba8::opaque(5, 6, 7));
    let blocks = sample_blocks(&s, align_grid(4, 2, 2, false), 2);
    assert_eq!(blocks.len(), 1);
    assert_eq!((blocks[0].x, blocks[0].y), (2, 0));
    assert_eq!(blocks[0].color, Rgba8::opaque(5, 6, 7));
}
