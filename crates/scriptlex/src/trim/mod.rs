//! Leading and trailing trimming over byte text.
//!
//! Two families live here:
//!
//! - Read-only scans (`omit_*`, [`trim_span`], [`trimmed`]) take a slice and
//!   report positions or lengths. The end of the slice is the terminator.
//! - In-place routines ([`ltrim`], [`rtrim`], [`trim`], [`rtrim_with_nbsp`])
//!   take a caller-owned buffer holding NUL-terminated text. The text ends at
//!   the first NUL, or at the end of the buffer when there is none. Trimming
//!   moves bytes only when leading blanks were found, and the move tolerates
//!   the overlap of source and destination.
//!
//! The whitespace-only routines trim spaces and tabs. They never trim line
//! breaks, so multi-line text keeps its structure.
//!
//! Invariants
//! - A supplied scan bound (`max_len`, `marker`) is never exceeded.
//! - A returned length is the true length of what remains.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{
    chars::{is_space_or_tab, is_space_or_tab_or_nbsp},
    text::c_len,
};


/// Position of the first byte of `s` that is neither a space nor a tab, or
/// `s.len()` when there is none.
#[must_use]
pub fn omit_leading_whitespace(s: &[u8]) -> usize {
    s.iter()
        .position(|&c| !is_space_or_tab(c))
        .unwrap_or(s.len())
}

/// Position of the first byte of `s` that is not in `omit`, looking at no
/// more than `max_len` bytes.
///
/// When every examined byte is omitted, the position just past the examined
/// region is returned.
///
/// ```rust
/// assert_eq!(scriptlex::omit_leading_any(b"--=x", b"-=", usize::MAX), 3);
/// assert_eq!(scriptlex::omit_leading_any(b"--=x", b"-=", 2), 2);
/// ```
#[must_use]
pub fn omit_leading_any(s: &[u8], omit: &[u8], max_len: usize) -> usize {
    let region = &s[..max_len.min(s.len())];
    region.find_not_byteset(omit).unwrap_or(region.len())
}

/// Scans backward from `marker` and returns the position of the last byte
/// that is neither a space nor a tab.
///
/// Position 0 is returned when everything down to the start is blank; the
/// byte at position 0 itself is never examined.
///
/// # Panics
///
/// If `marker` is not a position within `s`.
#[must_use]
pub fn omit_trailing_whitespace(s: &[u8], mut marker: usize) -> usize {
    while marker > 0 && is_space_or_tab(s[marker]) {
        marker -= 1;
    }
    marker
}

/// Scans backward from `marker` over bytes in `omit` and returns the length
/// that remains, counting from the start of `s`.
///
/// The result is 0 when `s[..=marker]` consists only of omitted bytes.
///
/// ```rust
/// assert_eq!(scriptlex::omit_trailing_any(b"aaabaaa", b"a", 6), 4);
/// assert_eq!(scriptlex::omit_trailing_any(b"aaa", b"a", 2), 0);
/// ```
///
/// # Panics
///
/// If `marker` is not a position within `s`.
#[must_use]
pub fn omit_trailing_any(s: &[u8], omit: &[u8], marker: usize) -> usize {
    s[..=marker].rfind_not_byteset(omit).map_or(0, |i| i + 1)
}

/// Where trimmed content sits inside a larger slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimSpan {
    /// Position of the first kept byte.
    pub start: usize,
    /// Number of kept bytes.
    pub len: usize,
}

impl TrimSpan {
    /// Position just past the last kept byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The kept bytes of `s`, which must be the slice this span came from.
    #[must_use]
    pub fn slice<'a>(&self, s: &'a [u8]) -> &'a [u8] {
        &s[self.start..self.end()]
    }
}

/// Locates `s` without its leading and trailing spaces and tabs.
#[must_use]
pub fn trim_span(s: &[u8]) -> TrimSpan {
    let start = omit_leading_whitespace(s);
    let len = kept_len(&s[start..], is_space_or_tab);
    TrimSpan { start, len }
}

/// `s` without its leading and trailing spaces and tabs. Never allocates.
///
/// ```rust
/// use bstr::B;
///
/// assert_eq!(scriptlex::trimmed(b" \tkey = value \r\n"), B("key = value \r\n"));
/// ```
#[must_use]
pub fn trimmed(s: &[u8]) -> &[u8] {
    trim_span(s).slice(s)
}

/// Length of `s` once trailing bytes matching `blank` are dropped.
fn kept_len(s: &[u8], blank: fn(u8) -> bool) -> usize {
    s.iter().rposition(|&c| !blank(c)).map_or(0, |i| i + 1)
}

/// Removes leading spaces and tabs from the text in `buf`.
///
/// `known_len` is the current text length when the caller already has it.
/// The return value is the new length if it is known after the call:
///
/// - With no leading blanks nothing is moved or measured, and `known_len` is
///   handed back as it came in (possibly `None`).
/// - Otherwise the rest of the text and its terminator are moved to the front
///   and the new length is returned.
///
/// Empty text always reports `Some(0)`.
///
/// ```rust
/// let mut buf = *b"  abc\0";
/// assert_eq!(scriptlex::ltrim(&mut buf, None), Some(3));
/// assert_eq!(&buf[..4], b"abc\0");
///
/// let mut buf = *b"abc \0";
/// assert_eq!(scriptlex::ltrim(&mut buf, None), None);
/// ```
pub fn ltrim(buf: &mut [u8], known_len: Option<usize>) -> Option<usize> {
    if buf.first().is_none_or(|&c| c == 0) {
        return Some(0);
    }
    let start = omit_leading_whitespace(buf);
    if start == 0 {
        return known_len;
    }
    let len = match known_len {
        Some(len) => len - start,
        None => c_len(&buf[start..]),
    };
    // `start > 0`, so `len < buf.len()` and there is room for the terminator.
    buf.copy_within(start..start + len, 0);
    buf[len] = 0;
    Some(len)
}

/// Removes trailing spaces and tabs from the text in `buf` by moving its
/// terminator. Returns the new length.
///
/// `known_len` spares a scan for the terminator when the caller already has
/// the current length.
///
/// ```rust
/// let mut buf = *b"   \0";
/// assert_eq!(scriptlex::rtrim(&mut buf, None), 0);
/// assert_eq!(buf[0], 0);
/// ```
pub fn rtrim(buf: &mut [u8], known_len: Option<usize>) -> usize {
    let len = known_len.unwrap_or_else(|| c_len(buf));
    if len == 0 {
        return 0;
    }
    let kept = kept_len(&buf[..len], is_space_or_tab);
    if kept < len {
        buf[kept] = 0;
    }
    kept
}

/// [`ltrim`] followed by [`rtrim`], passing the length along so the text is
/// measured at most once. Returns the new length.
pub fn trim(buf: &mut [u8], known_len: Option<usize>) -> usize {
    let len = ltrim(buf, known_len);
    rtrim(buf, len)
}

/// Like [`rtrim`], but also removes trailing [`NBSP`](crate::NBSP) bytes.
///
/// Unlike [`rtrim`] this does not report the new length; callers that need
/// it measure the text again.
pub fn rtrim_with_nbsp(buf: &mut [u8]) {
    let len = c_len(buf);
    let kept = kept_len(&buf[..len], is_space_or_tab_or_nbsp);
    if kept < len {
        buf[kept] = 0;
    }
}

/// Space-and-tab trimming for owned text that tracks its own length.
///
/// Each method returns the new length. Leading trims shift the remaining
/// bytes only when something was removed.
pub trait TrimInPlace {
    /// Removes leading spaces and tabs.
    fn ltrim_in_place(&mut self) -> usize;

    /// Removes trailing spaces and tabs.
    fn rtrim_in_place(&mut self) -> usize;

    /// Removes leading and trailing spaces and tabs.
    fn trim_in_place(&mut self) -> usize {
        self.ltrim_in_place();
        self.rtrim_in_place()
    }
}

impl TrimInPlace for Vec<u8> {
    fn ltrim_in_place(&mut self) -> usize {
        let start = omit_leading_whitespace(self);
        if start > 0 {
            self.drain(..start);
        }
        self.len()
    }

    fn rtrim_in_place(&mut self) -> usize {
        self.truncate(kept_len(self, is_space_or_tab));
        self.len()
    }
}

// Spaces and tabs are single-byte, so every cut below lands on a char
// boundary.
impl TrimInPlace for String {
    fn ltrim_in_place(&mut self) -> usize {
        let start = omit_leading_whitespace(self.as_bytes());
        if start > 0 {
            self.drain(..start);
        }
        self.len()
    }

    fn rtrim_in_place(&mut self) -> usize {
        self.truncate(kept_len(self.as_bytes(), is_space_or_tab));
        self.len()
    }
}
