//! Lexical primitives for a scripting-language front end.
//!
//! The routines here sit underneath a tokenizer and expression evaluator.
//! They decide whether `"010"` is a number (it is, and it is decimal), where
//! a hex literal starts, how `i64::MIN` is spelled in hex, and how leading and
//! trailing blanks are removed without disturbing line breaks.
//!
//! Text is handled as bytes. The character model is 8-bit, so the
//! non-breaking space is the single byte [`NBSP`].
//!
//! ```rust
//! use scriptlex::{FormatMode, NumericKind, NumericOptions, classify, int64_to_string, string_to_int64};
//!
//! assert_eq!(classify(b"010", &NumericOptions::default()), NumericKind::Integer);
//! assert_eq!(string_to_int64(b"010"), 10);
//!
//! let hex = int64_to_string(i64::MIN, FormatMode::Hex);
//! assert_eq!(hex, "-0x8000000000000000");
//! assert_eq!(string_to_int64(hex.as_bytes()), i64::MIN);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

/// Configuration changes are traced through the `log` facade when the
/// `logging` feature is on.
#[cfg(feature = "logging")]
macro_rules! trace {
    ($($arg:tt)+) => { ::log::trace!(target: "scriptlex", $($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

mod chars;
mod error;
mod numeric;
mod options;
mod radix;
mod text;
mod token;
mod trim;

#[cfg(test)]
mod tests;

pub use chars::{NBSP, is_c_space, is_space_or_tab, is_space_or_tab_or_nbsp};
pub use error::{Member, ParseFormatModeError, TokenError};
pub use numeric::{NumericKind, NumericValue, classify, is_hex, parse_numeric};
pub use options::{FormatMode, NumericOptions, SharedFormatMode};
pub use radix::{
    FormattedInt, format_int32, format_int64, format_uint32, format_uint64, int32_to_string,
    int64_to_string, string_to_double, string_to_int32, string_to_int64, string_to_uint32,
    string_to_uint64, uint32_to_string, uint64_to_string,
};
pub use text::{bounded_len, c_len, copy_truncated, find_any, title_case};
pub use token::{DerefKind, MapItem, Symbol, Token, TokenValue};
pub use trim::{
    TrimInPlace, TrimSpan, ltrim, omit_leading_any, omit_leading_whitespace, omit_trailing_any,
    omit_trailing_whitespace, rtrim, rtrim_with_nbsp, trim, trim_span, trimmed,
};
