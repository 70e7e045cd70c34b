//! LZ-End phrase representation

/// A single LZ-End phrase.
///
/// The first `len - 1` bytes are a copy of a suffix of the text prefix
/// ending where phrase `lnk` ends; the last byte is the literal `ext`.
/// Phrase 0 is always the synthetic literal covering the first input byte;
/// its `lnk` of 0 refers to itself and consumers must treat it as a pure
/// literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    /// Index of the source phrase whose ending is reused; 0 for literals.
    pub lnk: i32,
    /// Length of this phrase in bytes, including the terminating literal.
    pub len: i32,
    /// The final literal byte.
    pub ext: u8,
}

impl Phrase {
    /// Create a phrase.
    #[inline]
    pub fn new(lnk: i32, len: i32, ext: u8) -> Self {
        Self { lnk, len, ext }
    }

    /// Whether this phrase is a bare literal (nothing copied).
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.len == 1
    }
}
