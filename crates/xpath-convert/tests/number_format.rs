use proptest::prelude::*;
use rstest::rstest;
use xpath_convert::{format_number, parse_number};

#[rstest]
#[case(0.0, "0")]
#[case(-0.0, "0")]
#[case(1.0, "1")]
#[case(-1.0, "-1")]
#[case(12.0, "12")]
#[case(100.0, "100")]
#[case(0.5, "0.5")]
#[case(-0.25, "-0.25")]
#[case(0.1, "0.1")]
#[case(0.000_000_3, "0.0000003")]
#[case(-0.000_000_3, "-0.0000003")]
#[case(100_000_000.5, "100000000.5")]
#[case(123.456, "123.456")]
#[case(1e21, "1000000000000000000000")]
#[case(1.5e22, "15000000000000000000000")]
#[case(1e-10, "0.0000000001")]
#[case(9_007_199_254_740_993.0, "9007199254740992")]
fn formats_plain_decimal(#[case] n: f64, #[case] expected: &str) {
    assert_eq!(format_number(n), expected);
}

#[rstest]
#[case(f64::NAN, "NaN")]
#[case(f64::INFINITY, "Infinity")]
#[case(f64::NEG_INFINITY, "-Infinity")]
fn formats_special_values(#[case] n: f64, #[case] expected: &str) {
    assert_eq!(format_number(n), expected);
}

#[rstest]
fn extreme_magnitudes_stay_fixed_point() {
    let tiny = format_number(f64::from_bits(1)); // smallest subnormal
    assert!(tiny.starts_with("0.000"));
    assert!(tiny.ends_with('5'));
    assert_eq!(tiny.len(), "0.".len() + 324);

    let huge = format_number(f64::MAX);
    assert!(huge.starts_with("17976931348623157"));
    assert_eq!(huge.len(), 309);
    assert!(!huge.contains('.'));
}

#[rstest]
#[case("12", 12.0)]
#[case("  12  ", 12.0)]
#[case("\t-3.5\n", -3.5)]
#[case(".5", 0.5)]
#[case("-.5", -0.5)]
#[case("7.", 7.0)]
#[case("0.0000003", 0.000_000_3)]
fn parses_xpath_numbers(#[case] s: &str, #[case] expected: f64) {
    assert_eq!(parse_number(s).to_bits(), expected.to_bits());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(".")]
#[case("-")]
#[case("+1")]
#[case("1e5")]
#[case("1 2")]
#[case("Infinity")]
#[case("NaN")]
#[case("0x10")]
#[case("1.2.3")]
fn rejects_malformed_numbers(#[case] s: &str) {
    assert!(parse_number(s).is_nan(), "expected NaN for {s:?}");
}

#[rstest]
fn negative_zero_string_parses_back_to_zero() {
    assert_eq!(parse_number(&format_number(-0.0)), 0.0);
}

proptest! {
    #[test]
    fn prop_finite_numbers_round_trip(bits in any::<u64>()) {
        let n = f64::from_bits(bits);
        prop_assume!(n.is_finite());
        let s = format_number(n);
        prop_assert!(!s.contains(['e', 'E']), "exponent in {s}");
        let back = parse_number(&s);
        prop_assert_eq!(back, n, "{} did not round-trip via {}", n, s);
    }

    #[test]
    fn prop_integers_have_no_decimal_point(
        i in -9_007_199_254_740_991i64..9_007_199_254_740_991i64,
    ) {
        #[allow(clippy::cast_precision_loss)]
        let n = i as f64;
        prop_assert_eq!(format_number(n), i.to_string());
    }

    #[test]
    fn prop_fractions_keep_shortest_digits(whole in 0u32..1_000_000, frac in 1u32..1000) {
        let s = format!("{whole}.{frac:03}");
        let n: f64 = s.parse().unwrap();
        let expected = s.trim_end_matches('0');
        prop_assert_eq!(format_number(n), expected);
    }
}
