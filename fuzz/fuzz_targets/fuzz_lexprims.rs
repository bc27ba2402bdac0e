#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scriptlex::{
    FormatMode, NumericOptions, NumericValue, TrimInPlace, c_len, classify, int64_to_string,
    ltrim, parse_numeric, rtrim, rtrim_with_nbsp, string_to_double, string_to_int32,
    string_to_int64, string_to_uint64, trim, trimmed,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    allow_negative: bool,
    allow_leading_whitespace: bool,
    allow_float: bool,
    allow_trailing_garbage: bool,
    blank_is_integer: bool,
    hex: bool,
    pass_len: bool,
}

fn check_trims(text: &[u8], pass_len: bool) {
    let text = &text[..c_len(text)];
    let expected = trimmed(text);

    let mut buf = text.to_vec();
    buf.push(0);
    let len = trim(&mut buf, pass_len.then_some(text.len()));
    assert_eq!(&buf[..len], expected);
    assert_eq!(buf[len], 0);
    assert_eq!(trim(&mut buf, Some(len)), len);

    let mut left = text.to_vec();
    left.push(0);
    let left_len = ltrim(&mut left, None).unwrap_or(text.len());
    assert_eq!(c_len(&left), left_len);

    let mut right = text.to_vec();
    right.push(0);
    let right_len = rtrim(&mut right, Some(text.len()));
    assert!(right_len <= text.len());
    assert_eq!(&right[..right_len], &text[..right_len]);

    let mut nbsp = text.to_vec();
    nbsp.push(0);
    rtrim_with_nbsp(&mut nbsp);
    assert!(c_len(&nbsp) <= text.len());

    let mut owned = text.to_vec();
    owned.trim_in_place();
    assert_eq!(owned, expected);
}

fn check_numbers(input: &Input) {
    let options = NumericOptions {
        allow_negative: input.allow_negative,
        allow_leading_whitespace: input.allow_leading_whitespace,
        allow_float: input.allow_float,
        allow_trailing_garbage: input.allow_trailing_garbage,
        blank_is_integer: input.blank_is_integer,
    };
    let kind = classify(&input.text, &options);
    assert_eq!(classify(&input.text, &options), kind);
    let value = parse_numeric(&input.text, &options);
    assert_eq!(value.kind(), kind);
    if let NumericValue::Integer(v) = value {
        let mode = if input.hex {
            FormatMode::Hex
        } else {
            FormatMode::Decimal
        };
        assert_eq!(string_to_int64(int64_to_string(v, mode).as_bytes()), v);
    }

    let _ = string_to_int32(&input.text);
    let _ = string_to_uint64(&input.text);
    let _ = string_to_double(&input.text);
}

fuzz_target!(|input: Input| {
    check_trims(&input.text, input.pass_len);
    check_numbers(&input);
});
