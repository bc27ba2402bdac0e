use rstest::rstest;

use super::*;

const DEFAULT: NumericOptions = NumericOptions {
    allow_negative: false,
    allow_leading_whitespace: true,
    allow_float: false,
    allow_trailing_garbage: false,
    blank_is_integer: false,
};

const FLOAT: NumericOptions = NumericOptions {
    allow_float: true,
    ..DEFAULT
};

const SIGNED_FLOAT: NumericOptions = NumericOptions {
    allow_negative: true,
    ..FLOAT
};

const IMPURE: NumericOptions = NumericOptions {
    allow_trailing_garbage: true,
    ..SIGNED_FLOAT
};

const STRICT: NumericOptions = NumericOptions {
    allow_leading_whitespace: false,
    ..SIGNED_FLOAT
};

#[test]
fn default_options_match_const() {
    assert_eq!(NumericOptions::default(), DEFAULT);
}

#[rstest]
#[case(b"0x1", true)]
#[case(b"0XaB", true)]
#[case(b"  -0x1A", true)]
#[case(b"\t+0xff", true)]
#[case(b"0xg", false)]
#[case(b"0x", false)]
#[case(b"0X", false)]
#[case(b"x1", false)]
#[case(b"00x1", false)]
#[case(b"--0x1", false)]
#[case(b"- 0x1", false)]
#[case(b"\n0x1", false)]
#[case(b"", false)]
fn hex_detection(#[case] s: &[u8], #[case] expected: bool) {
    assert_eq!(is_hex(s), expected);
}

#[rstest]
#[case(b"0", NumericKind::Integer)]
#[case(b"010", NumericKind::Integer)]
#[case(b"+7", NumericKind::Integer)]
#[case(b"  42  ", NumericKind::Integer)]
#[case(b"0x1F", NumericKind::Integer)]
#[case(b"0xDEADbeef", NumericKind::Integer)]
#[case(b"-1", NumericKind::NotNumeric)]
#[case(b"3.14", NumericKind::NotNumeric)]
#[case(b"1 2", NumericKind::NotNumeric)]
#[case(b"12abc", NumericKind::NotNumeric)]
#[case(b"0x1G", NumericKind::NotNumeric)]
#[case(b"+", NumericKind::NotNumeric)]
#[case(b"", NumericKind::NotNumeric)]
#[case(b"   ", NumericKind::NotNumeric)]
#[case(b"1\n", NumericKind::NotNumeric)]
fn classify_default(#[case] s: &[u8], #[case] expected: NumericKind) {
    assert_eq!(classify(s, &DEFAULT), expected);
}

#[rstest]
#[case(b"3.14", NumericKind::Float)]
#[case(b".5", NumericKind::Float)]
#[case(b"5.", NumericKind::Float)]
#[case(b"1.0e10", NumericKind::Float)]
#[case(b"1.0E-4", NumericKind::Float)]
#[case(b"2.e+3", NumericKind::Float)]
#[case(b"1.0e", NumericKind::Float)]
#[case(b"0x10", NumericKind::Integer)]
#[case(b"0xE", NumericKind::Integer)]
#[case(b"1e4", NumericKind::NotNumeric)]
#[case(b".e4", NumericKind::NotNumeric)]
#[case(b".", NumericKind::NotNumeric)]
#[case(b"1.2.3", NumericKind::NotNumeric)]
#[case(b"0x1.5", NumericKind::NotNumeric)]
#[case(b"1.5f", NumericKind::NotNumeric)]
#[case(b"-1.5", NumericKind::NotNumeric)]
fn classify_float(#[case] s: &[u8], #[case] expected: NumericKind) {
    assert_eq!(classify(s, &FLOAT), expected);
}

#[rstest]
#[case(b"-1", NumericKind::Integer)]
#[case(b"-1.5", NumericKind::Float)]
#[case(b"-0x10", NumericKind::Integer)]
#[case(b"-", NumericKind::NotNumeric)]
#[case(b"-.", NumericKind::NotNumeric)]
#[case(b"--1", NumericKind::NotNumeric)]
#[case(b"+-1", NumericKind::NotNumeric)]
fn classify_signed(#[case] s: &[u8], #[case] expected: NumericKind) {
    assert_eq!(classify(s, &SIGNED_FLOAT), expected);
}

#[rstest]
#[case(b"12abc", NumericKind::Integer)]
#[case(b"12.5px", NumericKind::Float)]
#[case(b"1 2", NumericKind::Integer)]
#[case(b"1.5e3", NumericKind::Float)]
#[case(b"0x1Fzz", NumericKind::Integer)]
#[case(b"abc", NumericKind::NotNumeric)]
#[case(b"-x", NumericKind::NotNumeric)]
#[case(b".x", NumericKind::NotNumeric)]
#[case(b"1.2.3", NumericKind::NotNumeric)]
fn classify_impure(#[case] s: &[u8], #[case] expected: NumericKind) {
    assert_eq!(classify(s, &IMPURE), expected);
}

#[test]
fn point_is_not_garbage_when_floats_are_off() {
    let options = NumericOptions {
        allow_trailing_garbage: true,
        ..DEFAULT
    };
    assert_eq!(classify(b"3.14", &options), NumericKind::NotNumeric);
    assert_eq!(classify(b"3,14", &options), NumericKind::Integer);
}

#[rstest]
#[case(b"  1", NumericKind::NotNumeric)]
#[case(b"\t0x1", NumericKind::NotNumeric)]
#[case(b"1  ", NumericKind::Integer)]
#[case(b"-2.5", NumericKind::Float)]
fn classify_without_leading_blanks(#[case] s: &[u8], #[case] expected: NumericKind) {
    assert_eq!(classify(s, &STRICT), expected);
}

#[test]
fn blank_input() {
    let blank_ok = NumericOptions {
        blank_is_integer: true,
        ..DEFAULT
    };
    let blanks: [&[u8]; 3] = [b"", b" ", b" \t "];
    for s in blanks {
        assert_eq!(classify(s, &blank_ok), NumericKind::Integer);
        assert_eq!(classify(s, &DEFAULT), NumericKind::NotNumeric);
        assert_eq!(parse_numeric(s, &blank_ok), NumericValue::Integer(0));
    }
    assert_eq!(classify(b" x", &blank_ok), NumericKind::NotNumeric);
}

#[test]
fn classify_is_repeatable() {
    let inputs: [&[u8]; 5] = [b"1.5", b"0x", b"  -7 ", b"1e", b"12abc"];
    for s in inputs {
        for options in [DEFAULT, FLOAT, SIGNED_FLOAT, IMPURE, STRICT] {
            assert_eq!(classify(s, &options), classify(s, &options));
        }
    }
}

#[rstest]
#[case(b"010", NumericValue::Integer(10))]
#[case(b"  0x7fffffffffffffff", NumericValue::Integer(i64::MAX))]
#[case(b"-0x8000000000000000", NumericValue::Integer(i64::MIN))]
#[case(b"-12.5e1", NumericValue::Float(-125.0))]
#[case(b"12abc", NumericValue::Integer(12))]
#[case(b"0x1Fzz", NumericValue::Integer(31))]
#[case(b"2.5 kg", NumericValue::Float(2.5))]
#[case(b"kg", NumericValue::NotNumeric)]
fn parse_impure_values(#[case] s: &[u8], #[case] expected: NumericValue) {
    let value = parse_numeric(s, &IMPURE);
    assert_eq!(value, expected);
    assert_eq!(value.kind(), classify(s, &IMPURE));
    assert_eq!(value.is_numeric(), expected != NumericValue::NotNumeric);
}
