//! Conversion between text and 32/64-bit integers or doubles.
//!
//! Parsing picks the base from the text itself: a hex literal (see
//! [`is_hex`]) is read in base 16, anything else in base 10. There is no
//! octal; `"010"` is ten.
//!
//! All parsers are total. They skip leading C whitespace, accept one sign,
//! read digits up to the first byte that is not one, and yield zero when
//! there are no digits. Out-of-range input saturates: signed results clamp
//! to the type's bounds, unsigned results clamp to the maximum. A `-` before
//! an unsigned number wraps it, so `"-1"` is the maximum unsigned value.
//!
//! Formatting takes a [`FormatMode`]. In hex mode a negative number is
//! written as `-0x` followed by its magnitude, never as its two's
//! complement, so it parses back to the same value.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{chars::is_c_space, numeric::is_hex, options::FormatMode};


/// Sign and magnitude read from the front of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scanned {
    negative: bool,
    magnitude: u64,
    overflow: bool,
}

fn radix_of(s: &[u8]) -> u32 {
    if is_hex(s) { 16 } else { 10 }
}

fn skip_c_space(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| !is_c_space(c)).unwrap_or(s.len());
    &s[start..]
}

fn scan_integer(s: &[u8], radix: u32) -> Scanned {
    let mut rest = skip_c_space(s);
    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };
    if radix == 16 {
        if let [b'0', b'x' | b'X', tail @ ..] = rest {
            rest = tail;
        }
    }

    let mut magnitude = 0u64;
    let mut overflow = false;
    for &c in rest {
        let Some(digit) = char::from(c).to_digit(radix) else {
            break;
        };
        if let Some(next) = magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            magnitude = next;
        } else {
            overflow = true;
            magnitude = u64::MAX;
            break;
        }
    }

    Scanned {
        negative,
        magnitude,
        overflow,
    }
}

impl Scanned {
    fn to_i64(self) -> i64 {
        if self.negative {
            if self.overflow || self.magnitude > i64::MIN.unsigned_abs() {
                i64::MIN
            } else {
                0i64.wrapping_sub_unsigned(self.magnitude)
            }
        } else {
            i64::try_from(self.magnitude).unwrap_or(i64::MAX)
        }
    }

    fn to_i32(self) -> i32 {
        let magnitude = u32::try_from(self.magnitude).ok().filter(|_| !self.overflow);
        if self.negative {
            match magnitude {
                Some(m) if m <= i32::MIN.unsigned_abs() => 0i32.wrapping_sub_unsigned(m),
                _ => i32::MIN,
            }
        } else {
            magnitude
                .and_then(|m| i32::try_from(m).ok())
                .unwrap_or(i32::MAX)
        }
    }

    fn to_u64(self) -> u64 {
        if self.overflow {
            u64::MAX
        } else if self.negative {
            self.magnitude.wrapping_neg()
        } else {
            self.magnitude
        }
    }

    fn to_u32(self) -> u32 {
        match u32::try_from(self.magnitude) {
            Ok(m) if !self.overflow => {
                if self.negative {
                    m.wrapping_neg()
                } else {
                    m
                }
            }
            _ => u32::MAX,
        }
    }
}

/// Reads a signed 64-bit integer, in base 16 for hex literals and base 10
/// otherwise.
///
/// ```rust
/// use scriptlex::string_to_int64;
///
/// assert_eq!(string_to_int64(b"010"), 10);
/// assert_eq!(string_to_int64(b" -0x1A"), -26);
/// assert_eq!(string_to_int64(b"12abc"), 12);
/// assert_eq!(string_to_int64(b"abc"), 0);
/// assert_eq!(string_to_int64(b"99999999999999999999"), i64::MAX);
/// ```
#[must_use]
pub fn string_to_int64(s: &[u8]) -> i64 {
    scan_integer(s, radix_of(s)).to_i64()
}

/// Reads an unsigned 64-bit integer, in base 16 for hex literals and base 10
/// otherwise.
#[must_use]
pub fn string_to_uint64(s: &[u8]) -> u64 {
    scan_integer(s, radix_of(s)).to_u64()
}

/// Reads a signed 32-bit integer, in base 16 for hex literals and base 10
/// otherwise.
#[must_use]
pub fn string_to_int32(s: &[u8]) -> i32 {
    scan_integer(s, radix_of(s)).to_i32()
}

/// Reads an unsigned 32-bit integer, in base 16 for hex literals and base 10
/// otherwise.
#[must_use]
pub fn string_to_uint32(s: &[u8]) -> u32 {
    scan_integer(s, radix_of(s)).to_u32()
}

/// Reads a double.
///
/// Hex literals are read as a signed 64-bit integer and converted, so
/// `"0x10"` is `16.0`. Otherwise the longest prefix of the form
/// `[sign] digits [. digits] [e [sign] digits]` is read; an exponent without
/// digits is not part of the prefix.
///
/// ```rust
/// use scriptlex::string_to_double;
///
/// assert_eq!(string_to_double(b"0x10"), 16.0);
/// assert_eq!(string_to_double(b" -1.5e2xyz"), -150.0);
/// assert_eq!(string_to_double(b"2.5e"), 2.5);
/// assert_eq!(string_to_double(b"."), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn string_to_double(s: &[u8]) -> f64 {
    if is_hex(s) {
        return string_to_int64(s) as f64;
    }
    let prefix = float_prefix(skip_c_space(s));
    core::str::from_utf8(prefix)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn digits_at(s: &[u8], at: usize) -> usize {
    s.get(at..)
        .map_or(0, |tail| tail.iter().take_while(|c| c.is_ascii_digit()).count())
}

/// The leading part of `s` that forms a decimal float, or nothing.
fn float_prefix(s: &[u8]) -> &[u8] {
    let mut end = usize::from(matches!(s.first(), Some(b'+' | b'-')));
    let whole = digits_at(s, end);
    end += whole;
    let mut fraction = 0;
    if s.get(end) == Some(&b'.') {
        fraction = digits_at(s, end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return &[];
    }
    if matches!(s.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(s.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_at(s, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &s[..end]
}

/// An integer ready to be written in the radix of a [`FormatMode`].
///
/// Produced by the `format_*` functions. Writing it does not allocate.
///
/// ```rust
/// use scriptlex::{FormatMode, format_int64};
///
/// let line = format!("x = {}", format_int64(-255, FormatMode::Hex));
/// assert_eq!(line, "x = -0xff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedInt {
    negative: bool,
    magnitude: u64,
    mode: FormatMode,
}

impl fmt::Display for FormattedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match self.mode {
            FormatMode::Decimal => write!(f, "{}", self.magnitude),
            FormatMode::Hex => write!(f, "0x{:x}", self.magnitude),
        }
    }
}

/// Formats a signed 64-bit integer. `i64::MIN` is written with its full
/// magnitude.
#[must_use]
pub fn format_int64(value: i64, mode: FormatMode) -> FormattedInt {
    FormattedInt {
        negative: value < 0,
        magnitude: value.unsigned_abs(),
        mode,
    }
}

/// Formats a signed 32-bit integer.
#[must_use]
pub fn format_int32(value: i32, mode: FormatMode) -> FormattedInt {
    FormattedInt {
        negative: value < 0,
        magnitude: u64::from(value.unsigned_abs()),
        mode,
    }
}

/// Formats an unsigned 64-bit integer. Never signed.
#[must_use]
pub fn format_uint64(value: u64, mode: FormatMode) -> FormattedInt {
    FormattedInt {
        negative: false,
        magnitude: value,
        mode,
    }
}

/// Formats an unsigned 32-bit integer. Never signed.
#[must_use]
pub fn format_uint32(value: u32, mode: FormatMode) -> FormattedInt {
    format_uint64(u64::from(value), mode)
}

/// [`format_int64`] into a new `String`.
///
/// ```rust
/// use scriptlex::{FormatMode, int64_to_string};
///
/// assert_eq!(int64_to_string(-26, FormatMode::Hex), "-0x1a");
/// assert_eq!(int64_to_string(-26, FormatMode::Decimal), "-26");
/// ```
#[must_use]
pub fn int64_to_string(value: i64, mode: FormatMode) -> String {
    format_int64(value, mode).to_string()
}

/// [`format_int32`] into a new `String`.
#[must_use]
pub fn int32_to_string(value: i32, mode: FormatMode) -> String {
    format_int32(value, mode).to_string()
}

/// [`format_uint64`] into a new `String`.
#[must_use]
pub fn uint64_to_string(value: u64, mode: FormatMode) -> String {
    format_uint64(value, mode).to_string()
}

/// [`format_uint32`] into a new `String`.
#[must_use]
pub fn uint32_to_string(value: u32, mode: FormatMode) -> String {
    format_uint32(value, mode).to_string()
}
