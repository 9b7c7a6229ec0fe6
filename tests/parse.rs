use floatscan::{from_slice, from_str, Advisory};

fn check(input: &str, value: f64, len: usize) {
    let parsed = from_str(input);
    assert_eq!(parsed.value(), value, "value for {:?}", input);
    assert_eq!(parsed.len(), len, "len for {:?}", input);
    assert_eq!(parsed.advisory(), None, "advisory for {:?}", input);
}

#[test]
fn non_numeric_test() {
    check("", 0.0, 0);
    check("   ", 0.0, 0);
    check("abc", 0.0, 0);
    check("e5", 0.0, 0);

    // A sign or point with no digit behind it consumes nothing.
    check("+", 0.0, 0);
    check("-", 0.0, 0);
    check(".", 0.0, 0);
    check("-.", 0.0, 0);
    check("  + ", 0.0, 0);

    assert!(from_str("x").is_empty());
    assert!(!from_str("1").is_empty());
}

#[test]
fn plain_numeral_test() {
    check("0", 0.0, 1);
    check("3.14", 3.14, 4);
    check("+3.5", 3.5, 4);
    check("-17", -17.0, 3);
    check("00012", 12.0, 5);
    check("  1.5abc", 1.5, 5);

    // The run may start or end at the point.
    check("3.", 3.0, 2);
    check(".5", 0.5, 2);

    // Only the first point belongs to the numeral.
    check("1.2.3", 1.2, 3);

    // Hexadecimal is out of scope; the leading zero stands alone.
    check("0x10", 0.0, 1);
}

#[test]
fn exponent_field_test() {
    check("  -0.5e3", -500.0, 8);
    check("1e5", 100000.0, 3);
    check("1e+5", 100000.0, 4);
    check("1E-2", 0.01, 4);
    check("5.e3", 5000.0, 4);
    check("2.5e-1x", 0.25, 6);

    // A marker with no digit behind it is not consumed.
    check("1e", 1.0, 1);
    check("1e+", 1.0, 1);
    check("1e-", 1.0, 1);
    check("7eel", 7.0, 1);
}

#[test]
fn signed_zero_test() {
    let parsed = from_str("-0.0");
    assert_eq!(parsed.value(), 0.0);
    assert!(parsed.value().is_sign_negative());
    assert_eq!(parsed.len(), 4);

    // A lone sign backs no digits and yields the default positive zero.
    assert!(from_str("-").value().is_sign_positive());
}

#[test]
fn range_advisory_test() {
    let big = from_str("1e600");
    assert_eq!(big.advisory(), Some(Advisory::Overflow));
    assert_eq!(big.len(), 5);
    assert!(big.value().is_finite());

    // Saturation is monotone: the clamped value still dominates anything
    // the honored range produces.
    assert!(big.value() > from_str("1e300").value());
    assert!(big.value() >= from_str("1e308").value());

    let tiny = from_str("1e-600");
    assert_eq!(tiny.advisory(), Some(Advisory::Underflow));
    assert_eq!(tiny.len(), 6);
    assert_eq!(tiny.value(), 0.0);

    // The advisory direction follows the exponent, not the mantissa sign.
    let negative = from_str("-2e999");
    assert_eq!(negative.advisory(), Some(Advisory::Overflow));
    assert_eq!(negative.value(), -f64::MAX);

    // A zero mantissa saturates to zero, never NaN.
    let zero = from_str("0e600");
    assert_eq!(zero.advisory(), Some(Advisory::Overflow));
    assert_eq!(zero.value(), 0.0);
}

#[test]
fn truncated_mantissa_test() {
    // 18 significant digits fold exactly.
    check("123456789012345678", 123456789012345678.0, 18);

    // Past 18 the tail is dropped but its magnitude is preserved through
    // the exponent, so the result is off by truncation, not by a decade.
    let parsed = from_str("123456789012345678901.0");
    assert_eq!(parsed.len(), 23);
    let expected = 1.23456789012345678901e20;
    assert!((parsed.value() - expected).abs() <= expected * 1e-15);

    let parsed = from_str("1234567890123456789");
    assert_eq!(parsed.len(), 19);
    let expected: f64 = "1234567890123456789".parse().unwrap();
    assert!((parsed.value() - expected).abs() <= expected * 1e-15);
}

#[test]
fn agrees_with_std_test() {
    // Up to 15 significant digits and a combined exponent within +-22 the
    // mantissa and the power are both exact, so the single rounding step is
    // correct and must agree with the standard library parser bit for bit.
    for input in [
        "0",
        "1",
        "0.1",
        "2.5",
        "3.14",
        "250",
        "602214.076",
        "1e22",
        "1e-22",
        "5e20",
        "7.5e-3",
        "+0.25",
        "-0.625",
        "-42.195",
        "123456789.123456",
        "99999999999999.9",
    ] {
        let parsed = from_str(input);
        let expected: f64 = input.parse().unwrap();
        assert_eq!(parsed.value(), expected, "disagrees with std for {:?}", input);
        assert_eq!(parsed.len(), input.len(), "length for {:?}", input);
    }
}

#[test]
fn underflow_collapses_to_zero_test() {
    // The approximation forfeits subnormals: the divisor overflows first
    // and the quotient collapses. No advisory, the exponent is in range.
    let parsed = from_str("5e-324");
    assert_eq!(parsed.value(), 0.0);
    assert_eq!(parsed.advisory(), None);
    assert_eq!(parsed.len(), 6);
}

#[test]
fn roundtrip_test() {
    // Formatting a result with the shortest round-trip formatter and
    // converting it again must land on the same double.
    let mut buffer = zmij::Buffer::new();
    for input in ["3.14", "-0.5e3", "0.1", "123456789.123456", "1e22", "-7.5e-3"] {
        let first = from_str(input).value();
        let printed = buffer.format(first);
        let again = from_str(printed);
        assert_eq!(again.value(), first, "round-trip through {:?}", printed);
        assert_eq!(again.len(), printed.len());
    }
}

#[test]
fn slice_and_str_agree_test() {
    for input in ["", "  -0.5e3", "1e600", "nonsense", "3.14159xyz", "-0.0"] {
        assert_eq!(from_str(input), from_slice(input.as_bytes()));
    }
}
