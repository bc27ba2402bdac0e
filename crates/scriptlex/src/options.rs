#![allow(clippy::struct_excessive_bools)]

use alloc::string::ToString;
use core::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::error::ParseFormatModeError;

/// Strictness knobs for [`classify`](crate::classify) and
/// [`parse_numeric`](crate::parse_numeric).
///
/// # Examples
///
/// ```rust
/// use scriptlex::{NumericKind, NumericOptions, classify};
///
/// let options = NumericOptions {
///     allow_negative: true,
///     allow_float: true,
///     ..Default::default()
/// };
/// assert_eq!(classify(b"-2.5e3", &options), NumericKind::Float);
/// assert_eq!(classify(b"-2.5e3", &NumericOptions::default()), NumericKind::NotNumeric);
/// ```
///
/// # Default
///
/// Only `allow_leading_whitespace` defaults to `true`; everything else
/// defaults to `false`.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericOptions {
    /// Whether a leading `-` is accepted.
    ///
    /// A leading `+` is always accepted; it never changes the value.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_negative: bool,

    /// Whether spaces and tabs may precede the number.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_leading_whitespace: bool,

    /// Whether a decimal point and an exponent are part of the grammar.
    ///
    /// An exponent is only recognized after a decimal point with at least
    /// one digit before it, so that names such as `1e4` are not numbers.
    /// Hex literals are integers regardless of this flag.
    ///
    /// # Examples
    ///
    /// ```text
    /// 3.14   .5   7.   1.0e-4
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub allow_float: bool,

    /// Whether anything may follow the number.
    ///
    /// When `true`, `"12abc"` is an integer; the remainder is ignored. A
    /// decimal point is never treated as the start of such a remainder, so
    /// `"3.14"` stays non-numeric when floats are not allowed.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_garbage: bool,

    /// Whether an empty or all-blank string counts as an integer.
    ///
    /// Command arguments that were left blank are often meant as zero.
    ///
    /// # Default
    ///
    /// `false`
    pub blank_is_integer: bool,
}

impl Default for NumericOptions {
    fn default() -> Self {
        Self {
            allow_negative: false,
            allow_leading_whitespace: true,
            allow_float: false,
            allow_trailing_garbage: false,
            blank_is_integer: false,
        }
    }
}

/// Radix used when an integer is rendered as text.
///
/// The mode is passed to every conversion; converters never cache it.
///
/// # Examples
///
/// ```rust
/// use scriptlex::{FormatMode, int64_to_string};
///
/// let mode: FormatMode = "H".parse().unwrap();
/// assert_eq!(int64_to_string(255, mode), "0xff");
/// assert_eq!(int64_to_string(255, FormatMode::default()), "255");
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Plain base-10 digits.
    #[default]
    Decimal,
    /// `0x` followed by lowercase base-16 digits.
    Hex,
}

impl FormatMode {
    /// The numeric base this mode renders in.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            FormatMode::Decimal => 10,
            FormatMode::Hex => 16,
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatMode::Decimal => "D",
            FormatMode::Hex => "H",
        })
    }
}

/// Accepts the script-level spelling (`D`, `H`) as well as `decimal` and
/// `hex`, ignoring case and surrounding blanks.
impl FromStr for FormatMode {
    type Err = ParseFormatModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim_matches([' ', '\t']);
        let mode = if word.eq_ignore_ascii_case("d") || word.eq_ignore_ascii_case("decimal") {
            FormatMode::Decimal
        } else if word.eq_ignore_ascii_case("h") || word.eq_ignore_ascii_case("hex") {
            FormatMode::Hex
        } else {
            trace!("rejected integer format {s:?}");
            return Err(ParseFormatModeError(s.to_string()));
        };
        trace!("parsed integer format {s:?} as {mode:?}");
        Ok(mode)
    }
}

/// A [`FormatMode`] shared by a whole host.
///
/// Reads from any thread are safe. Writes are not ordered with respect to
/// conversions already running, so a host changes the mode from one place
/// before it starts converting concurrently.
///
/// ```rust
/// use scriptlex::{FormatMode, SharedFormatMode, int64_to_string};
///
/// static INTEGER_FORMAT: SharedFormatMode = SharedFormatMode::new(FormatMode::Decimal);
///
/// INTEGER_FORMAT.set(FormatMode::Hex);
/// assert_eq!(int64_to_string(-1, INTEGER_FORMAT.get()), "-0x1");
/// ```
#[derive(Debug, Default)]
pub struct SharedFormatMode {
    hex: AtomicBool,
}

impl SharedFormatMode {
    /// Creates a cell holding `mode`.
    #[must_use]
    pub const fn new(mode: FormatMode) -> Self {
        Self {
            hex: AtomicBool::new(matches!(mode, FormatMode::Hex)),
        }
    }

    /// The current mode.
    #[must_use]
    pub fn get(&self) -> FormatMode {
        if self.hex.load(Ordering::Acquire) {
            FormatMode::Hex
        } else {
            FormatMode::Decimal
        }
    }

    /// Replaces the mode, returning the previous one.
    pub fn set(&self, mode: FormatMode) -> FormatMode {
        let was_hex = self
            .hex
            .swap(matches!(mode, FormatMode::Hex), Ordering::AcqRel);
        let previous = if was_hex {
            FormatMode::Hex
        } else {
            FormatMode::Decimal
        };
        if previous != mode {
            trace!("integer format changed from {previous:?} to {mode:?}");
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("D", FormatMode::Decimal)]
    #[case("d", FormatMode::Decimal)]
    #[case(" Decimal\t", FormatMode::Decimal)]
    #[case("H", FormatMode::Hex)]
    #[case("hex", FormatMode::Hex)]
    #[case("HEX", FormatMode::Hex)]
    fn format_mode_from_str(#[case] input: &str, #[case] expected: FormatMode) {
        assert_eq!(input.parse::<FormatMode>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("hexadecimal")]
    #[case("D H")]
    fn format_mode_rejects(#[case] input: &str) {
        let err = input.parse::<FormatMode>().unwrap_err();
        assert_eq!(err, ParseFormatModeError(input.into()));
    }

    #[test]
    fn format_mode_display_parses_back() {
        for mode in [FormatMode::Decimal, FormatMode::Hex] {
            assert_eq!(mode.to_string().parse::<FormatMode>(), Ok(mode));
        }
    }

    #[test]
    fn shared_mode_swaps() {
        let shared = SharedFormatMode::default();
        assert_eq!(shared.get(), FormatMode::Decimal);
        assert_eq!(shared.set(FormatMode::Hex), FormatMode::Decimal);
        assert_eq!(shared.get(), FormatMode::Hex);
        assert_eq!(shared.set(FormatMode::Hex), FormatMode::Hex);
        assert_eq!(shared.set(FormatMode::Decimal), FormatMode::Hex);
    }

    #[test]
    fn options_serde_fills_defaults() {
        let options: NumericOptions =
            serde_json::from_str(r#"{"allow_float":true}"#).expect("valid options");
        assert_eq!(
            options,
            NumericOptions {
                allow_float: true,
                ..Default::default()
            }
        );
        let mode: FormatMode = serde_json::from_str(r#""hex""#).expect("valid mode");
        assert_eq!(mode, FormatMode::Hex);
    }

    #[test]
    fn snapshot_options_yaml() {
        let options = NumericOptions {
            allow_negative: true,
            allow_float: true,
            ..Default::default()
        };
        insta::assert_yaml_snapshot!(options, @r"
        allow_negative: true
        allow_leading_whitespace: true
        allow_float: true
        allow_trailing_garbage: false
        blank_is_integer: false
        ");
    }
}
