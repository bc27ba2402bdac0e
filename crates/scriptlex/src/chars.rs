//! Single-byte character predicates.

/// The non-breaking space of the 8-bit character set.
///
/// Text pasted from HTML documents often carries it where a plain space was
/// meant. As a signed `char` it reads as `-96`.
#[allow(clippy::cast_sign_loss)]
pub const NBSP: u8 = -96i8 as u8;

/// Returns `true` for a space or a horizontal tab.
///
/// Line breaks are deliberately not blanks: every trim routine built on this
/// predicate leaves `\r` and `\n` in place.
#[inline]
#[must_use]
pub const fn is_space_or_tab(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Like [`is_space_or_tab`], but also accepts [`NBSP`].
#[inline]
#[must_use]
pub const fn is_space_or_tab_or_nbsp(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == NBSP
}

/// The C `isspace` set: space, `\t`, `\n`, `\v`, `\f` and `\r`.
///
/// The integer and float converters skip any run of these before a number,
/// which is wider than the blank set used for trimming.
#[inline]
#[must_use]
pub const fn is_c_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_is_a0() {
        assert_eq!(NBSP, 0xA0);
    }

    #[test]
    fn blanks_exclude_line_breaks() {
        for c in [b'\n', b'\r', 0x0b, 0x0c, 0, b'a'] {
            assert!(!is_space_or_tab(c), "{c:#x}");
            assert!(!is_space_or_tab_or_nbsp(c), "{c:#x}");
        }
        assert!(is_space_or_tab(b' ') && is_space_or_tab(b'\t'));
        assert!(!is_space_or_tab(NBSP));
        assert!(is_space_or_tab_or_nbsp(NBSP));
    }

    #[test]
    fn c_space_covers_line_breaks() {
        let spaces: std::vec::Vec<u8> = (0..=u8::MAX).filter(|&c| is_c_space(c)).collect();
        assert_eq!(spaces, b"\t\n\x0b\x0c\r ");
    }
}
