pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Integer mean with halves rounded up: `round(sum / count)` for non-negative inputs.
///
/// `count` must be non-zero.
pub(crate) fn div_round_half_up(sum: u64, count: u64) -> u64 {
    (sum + count / 2) / count
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
