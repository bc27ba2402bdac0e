//! Small helpers for NUL-terminated byte buffers.

use bstr::ByteSlice;

use crate::chars::is_c_space;

/// Length of the text in `buf`: the position of the first NUL, or the whole
/// buffer when there is none.
#[inline]
#[must_use]
pub fn c_len(buf: &[u8]) -> usize {
    buf.find_byte(0).unwrap_or(buf.len())
}

/// [`c_len`], but never looking at more than `max` bytes.
///
/// ```rust
/// assert_eq!(scriptlex::bounded_len(b"abc\0def", 10), 3);
/// assert_eq!(scriptlex::bounded_len(b"abcdef", 4), 4);
/// ```
#[must_use]
pub fn bounded_len(buf: &[u8], max: usize) -> usize {
    c_len(&buf[..max.min(buf.len())])
}

/// Position of the first byte of `s` that appears anywhere in `set`.
///
/// This differs from searching for each member in turn: the earliest match
/// of *any* member wins. An empty `set` never matches.
///
/// ```rust
/// assert_eq!(scriptlex::find_any(b"a,b;c", b";,"), Some(1));
/// assert_eq!(scriptlex::find_any(b"abc", b""), None);
/// ```
#[must_use]
pub fn find_any(s: &[u8], set: &[u8]) -> Option<usize> {
    if set.is_empty() {
        return None;
    }
    s.find_byteset(set)
}

/// Title-cases ASCII letters in place: the first letter of each
/// whitespace-separated word is upper-cased, every other letter is
/// lower-cased.
///
/// Digits and punctuation are left alone and do not end a word, so
/// `"o'neil"` becomes `"O'neil"` and `"42nd"` becomes `"42Nd"`.
///
/// ```rust
/// let mut name = *b"hELLO  wORLD-wide";
/// scriptlex::title_case(&mut name);
/// assert_eq!(&name, b"Hello  World-wide");
/// ```
pub fn title_case(buf: &mut [u8]) {
    let len = c_len(buf);
    let mut word_start = true;
    for c in &mut buf[..len] {
        if c.is_ascii_alphabetic() {
            if word_start {
                c.make_ascii_uppercase();
                word_start = false;
            } else {
                c.make_ascii_lowercase();
            }
        } else if is_c_space(*c) {
            word_start = true;
        }
    }
}

/// Copies as much of `src` as fits into `dst` while leaving room for the
/// terminator, then terminates. Returns the number of bytes copied.
///
/// ```rust
/// let mut dst = [0xffu8; 4];
/// assert_eq!(scriptlex::copy_truncated(&mut dst, b"abcdef"), 3);
/// assert_eq!(&dst, b"abc\0");
/// ```
///
/// # Panics
///
/// If `dst` is empty.
pub fn copy_truncated(dst: &mut [u8], src: &[u8]) -> usize {
    let n = c_len(src).min(dst.len() - 1);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0;
    n
}
