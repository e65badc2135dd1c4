use crate::foundation::{core::Rgba8, math::mul_div255_u16};

/// Source-over for straight-alpha colors, integer math.
///
/// Painting onto a transparent pixel or painting an opaque color yields `src` unchanged, so a
/// single fill reproduces its color exactly.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 || dst.a == 0 {
        return src;
    }

    let sa = u32::from(src.a);
    let dw = u32::from(mul_div255_u16(u16::from(dst.a), 255 - u16::from(src.a)));
    let out_a = sa + dw;
    let mix = |s: u8, d: u8| -> u8 {
        ((u32::from(s) * sa + u32::from(d) * dw + out_a / 2) / out_a) as u8
    };

    Rgba8::new(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        out_a as u8,
    )
}

/// [`over`] applied to one RGBA8 pixel slice.
pub fn over_in_place(px: &mut [u8], src: Rgba8) {
    let dst = Rgba8::from_array([px[0], px[1], px[2], px[3]]);
    px.copy_from_slice(&over(dst, src).to_array());
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
