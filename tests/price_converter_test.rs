use fund_me::price_converter::{scale_to_wad, usd_value, WAD, WAD_DECIMALS};
use multiversx_sc_scenario::imports::*;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

#[test]
fn eight_decimal_answer_scales_to_wad() {
    let scaled = scale_to_wad(&big(200_000_000_000), 8);
    assert_eq!(scaled, big(2_000) * big(WAD));
}

#[test]
fn wad_answer_is_unchanged() {
    let answer = big(2_000) * big(WAD);
    assert_eq!(scale_to_wad(&answer, WAD_DECIMALS), answer);
}

#[test]
fn zero_decimal_answer_gains_full_precision() {
    assert_eq!(scale_to_wad(&big(2_000), 0), big(2_000) * big(WAD));
}

#[test]
fn one_egld_is_worth_the_price() {
    let price = big(2_000) * big(WAD);
    assert_eq!(usd_value(&price, &big(WAD)), price);
}

#[test]
fn usd_value_is_exact_at_the_minimum() {
    let price = big(2_000) * big(WAD);
    let minimum = big(50) * big(WAD);

    assert_eq!(usd_value(&price, &big(25_000_000_000_000_000)), minimum);
    assert!(usd_value(&price, &big(25_000_000_000_000_000 - 1)) < minimum);
}

#[test]
fn usd_value_truncates_dust() {
    // 1 unit at 0.5 USD per EGLD is worth less than one WAD unit
    let price = big(WAD / 2);
    assert_eq!(usd_value(&price, &big(1)), big(0));
    assert_eq!(usd_value(&price, &big(3)), big(1));
}

#[test]
fn zero_amount_is_worth_nothing() {
    let price = big(2_000) * big(WAD);
    assert_eq!(usd_value(&price, &big(0)), big(0));
}
