//! Tests for currency display formatting.

use rust_decimal_macros::dec;
use sitedash::utils::money::format_currency;

#[test]
fn groups_thousands_with_two_decimals() {
    assert_eq!(format_currency(dec!(1742.5), "$"), "$1,742.50");
    assert_eq!(format_currency(dec!(33500), "$"), "$33,500.00");
    assert_eq!(format_currency(dec!(0), "$"), "$0.00");
}

#[test]
fn negative_amounts_carry_the_sign_before_the_symbol() {
    assert_eq!(format_currency(dec!(-120), "$"), "-$120.00");
}

#[test]
fn configured_symbol_is_used_verbatim() {
    assert_eq!(format_currency(dec!(1742.5), "€"), "€1,742.50");
    assert_eq!(format_currency(dec!(-250), "£"), "-£250.00");
    assert_eq!(format_currency(dec!(5000), "CHF "), "CHF 5,000.00");
}
