//! Sequence normalization shared by every metric
//!
//! Strings are compared as sequences of Unicode scalar values. A string like
//! "café" written with a combining acute accent is five units long here, not
//! four: grapheme clusters are never merged and bytes are never indexed.

use smallvec::SmallVec;

/// Inline capacity for character buffers. Most compared strings (names,
/// identifiers, short phrases) fit without a heap allocation.
pub const INLINE_CHARS: usize = 64;

/// Indexable codepoint sequence.
pub type CharSeq = SmallVec<[char; INLINE_CHARS]>;

/// Collect a string into an indexable codepoint sequence.
#[inline]
#[must_use]
pub fn to_chars(s: &str) -> CharSeq {
    s.chars().collect()
}

/// Length in codepoints.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Lower-case a string and collect it as a codepoint sequence.
///
/// Lower-casing happens on the whole string first, so characters whose
/// lowercase form expands (e.g. 'İ') contribute every resulting codepoint.
#[must_use]
pub fn to_lowercase_chars(s: &str) -> CharSeq {
    s.to_lowercase().chars().collect()
}

/// Lower-case a string and split it on the literal space character.
///
/// Runs of consecutive spaces and leading/trailing spaces do not produce
/// empty tokens. Tabs and newlines are not separators.
#[must_use]
pub fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
