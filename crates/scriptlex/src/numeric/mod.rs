//! Deciding whether text is a number, and which kind.
//!
//! Classification only looks at the text; converting it is left to
//! [`radix`](crate::radix), so a caller that merely branches on the kind pays
//! for no conversion.
//!
//! Grammar (after the optional leading blanks and sign):
//!
//! ```text
//! hex      = "0" ("x" | "X") hexdigit hexdigit*
//! decimal  = digit* ["." digit*] [exponent]        at least one digit overall
//! exponent = ("e" | "E") ["+" | "-"] digit*        only after "." and a digit
//! ```
//!
//! Trailing spaces and tabs are always accepted. A leading zero has no
//! special meaning: `"010"` is the decimal ten.

use crate::{
    chars::is_space_or_tab,
    options::NumericOptions,
    radix::{string_to_double, string_to_int64},
    trim::omit_leading_whitespace,
};

#[cfg(test)]
mod tests;

/// What kind of number a string denotes, if any.
///
/// The discriminants are shared with the operand entries of
/// [`Symbol`](crate::Symbol), so a kind converts to a token category without
/// a lookup. `NotNumeric` is zero.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NumericKind {
    /// Not a number under the given options.
    NotNumeric = 0,
    /// An integer, decimal or hex.
    Integer = 1,
    /// A decimal number with a fractional part or exponent.
    Float = 2,
}

/// A classified and converted number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// Not a number under the given options.
    NotNumeric,
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
}

impl NumericValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            NumericValue::NotNumeric => NumericKind::NotNumeric,
            NumericValue::Integer(_) => NumericKind::Integer,
            NumericValue::Float(_) => NumericKind::Float,
        }
    }

    /// Returns `true` unless this is [`NotNumeric`](Self::NotNumeric).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, NumericValue::NotNumeric)
    }
}

/// `0x` or `0X` followed by at least one hex digit.
fn has_hex_prefix(s: &[u8]) -> bool {
    matches!(s, [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit())
}

/// Returns `true` if `s` starts, after optional spaces or tabs and an optional
/// sign, with a hex prefix followed by at least one hex digit.
///
/// Only the first digit is checked.
///
/// ```rust
/// use scriptlex::is_hex;
///
/// assert!(is_hex(b"  -0x1A"));
/// assert!(is_hex(b"0xFz"));
/// assert!(!is_hex(b"0x"));
/// assert!(!is_hex(b"0X"));
/// assert!(!is_hex(b"010"));
/// ```
#[must_use]
pub fn is_hex(s: &[u8]) -> bool {
    let s = &s[omit_leading_whitespace(s)..];
    let digits = match s {
        [b'-' | b'+', rest @ ..] => rest,
        _ => s,
    };
    has_hex_prefix(digits)
}

/// Classifies `s` as an integer, a float, or not a number.
///
/// The result depends only on `s` and `options`.
///
/// ```rust
/// use scriptlex::{NumericKind, NumericOptions, classify};
///
/// let floats = NumericOptions { allow_float: true, ..Default::default() };
/// assert_eq!(classify(b"3.14", &floats), NumericKind::Float);
/// assert_eq!(classify(b"3.14", &NumericOptions::default()), NumericKind::NotNumeric);
/// assert_eq!(classify(b"0xFF", &floats), NumericKind::Integer);
/// ```
#[must_use]
pub fn classify(s: &[u8], options: &NumericOptions) -> NumericKind {
    if s.iter().all(|&c| is_space_or_tab(c)) {
        return if options.blank_is_integer {
            NumericKind::Integer
        } else {
            NumericKind::NotNumeric
        };
    }

    let mut rest = s;
    if options.allow_leading_whitespace {
        rest = &rest[omit_leading_whitespace(rest)..];
    }
    match rest {
        [b'-', tail @ ..] if options.allow_negative => rest = tail,
        [b'-', ..] => return NumericKind::NotNumeric,
        [b'+', tail @ ..] => rest = tail,
        _ => {}
    }

    let hex = has_hex_prefix(rest);
    if hex {
        rest = &rest[2..];
    }

    let mut has_point = false;
    let mut has_digit = false;

    let mut i = 0;
    while i < rest.len() {
        let c = rest[i];
        if is_space_or_tab(c) {
            let trailing_blanks_only = omit_leading_whitespace(&rest[i..]) == rest.len() - i;
            if !trailing_blanks_only && !options.allow_trailing_garbage {
                return NumericKind::NotNumeric;
            }
            break;
        }

        let is_digit = if hex {
            c.is_ascii_hexdigit()
        } else {
            c.is_ascii_digit()
        };
        if c == b'.' {
            if !options.allow_float || has_point || hex {
                return NumericKind::NotNumeric;
            }
            has_point = true;
        } else if is_digit {
            has_digit = true;
        } else if options.allow_trailing_garbage {
            return kind_of(has_digit, has_point);
        } else {
            // Repeated exponents such as `1.0e4e5` are not rejected.
            if !matches!(c, b'e' | b'E') || !(has_point && has_digit) {
                return NumericKind::NotNumeric;
            }
            if matches!(rest.get(i + 1), Some(b'+' | b'-')) {
                i += 1;
            }
        }
        i += 1;
    }

    kind_of(has_digit, has_point)
}

fn kind_of(has_digit: bool, has_point: bool) -> NumericKind {
    match (has_digit, has_point) {
        (false, _) => NumericKind::NotNumeric,
        (true, false) => NumericKind::Integer,
        (true, true) => NumericKind::Float,
    }
}

/// Classifies `s` and, when it is a number, converts it.
///
/// Integers go through [`string_to_int64`] and floats through
/// [`string_to_double`], so hex literals keep their base and a leading zero
/// never means octal.
///
/// ```rust
/// use scriptlex::{NumericOptions, NumericValue, parse_numeric};
///
/// let options = NumericOptions { allow_negative: true, ..Default::default() };
/// assert_eq!(parse_numeric(b" -0x10 ", &options), NumericValue::Integer(-16));
/// assert_eq!(parse_numeric(b"010", &options), NumericValue::Integer(10));
/// assert_eq!(parse_numeric(b"ten", &options), NumericValue::NotNumeric);
/// ```
#[must_use]
pub fn parse_numeric(s: &[u8], options: &NumericOptions) -> NumericValue {
    match classify(s, options) {
        NumericKind::NotNumeric => NumericValue::NotNumeric,
        NumericKind::Integer => NumericValue::Integer(string_to_int64(s)),
        NumericKind::Float => NumericValue::Float(string_to_double(s)),
    }
}
