use super::*;

#[test]
fn unaligned_uses_full_surface() {
    let g = align_grid(605, 605, 10, false);
    assert_eq!(
        g,
        GridExtent {
            loop_width: 605,
            loop_height: 605,
            aligned: false
        }
    );
    assert_eq!(g.block_counts(10), (61, 61));
}

#[test]
fn aligned_drops_remainder_strips() {
    let g = align_grid(605, 605, 10, true);
    assert_eq!((g.loop_width, g.loop_height), (600, 600));
    assert!(g.aligned);
    assert_eq!(g.block_counts(10), (60, 60));
}

#[test]
fn aligned_axes_are_independent() {
    let g = align_grid(200, 600, 7, true);
    assert_eq!((g.loop_width, g.loop_height), (196, 595));
    assert_eq!(g.loop_width % 7, 0);
    assert_eq!(g.loop_height % 7, 0);
}

#[test]
fn oversized_block_skips_alignment() {
    let g = align_grid(600, 40, 50, true);
    assert_eq!((g.loop_width, g.loop_height), (600, 40));
    assert!(!g.aligned);
}

#[test]
fn alignment_is_idempotent() {
    let a = align_grid(613, 457, 12, true);
    let b = align_grid(613, 457, 12, true);
    assert_eq!(a, b);
    let again = align_grid(a.loop_width, a.loop_height, 12, true);
    assert_eq!(again, a);
}
