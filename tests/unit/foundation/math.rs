use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 51), 51);
}

#[test]
fn div_round_half_up_rounds_halves_up() {
    assert_eq!(div_round_half_up(10, 4), 3); // 2.5
    assert_eq!(div_round_half_up(9, 4), 2); // 2.25
    assert_eq!(div_round_half_up(11, 4), 3); // 2.75
    assert_eq!(div_round_half_up(1, 2), 1); // 0.5
    assert_eq!(div_round_half_up(255 * 7, 7), 255);
}
