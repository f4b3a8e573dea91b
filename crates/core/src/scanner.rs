use core::ops::Range;

/// `a`-`z` or `A`-`Z`.
#[inline]
#[must_use]
pub const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// `0`-`9`.
#[inline]
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Anything that is neither a letter nor a digit.
#[inline]
#[must_use]
pub const fn is_separator(b: u8) -> bool {
    !(is_letter(b) || is_digit(b))
}

/// Outcome of evaluating a candidate word start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSpan {
    /// A valid word ending (exclusive) at `end`, which is a separator or the
    /// end of the buffer.
    Word { end: usize },
    /// Not a word; scanning resumes at the next separator, `resume`.
    Rejected { resume: usize },
}

impl WordSpan {
    /// Position the scanner continues from, counted or not.
    #[must_use]
    pub const fn next_position(self) -> usize {
        match self {
            Self::Word { end } => end,
            Self::Rejected { resume } => resume,
        }
    }

    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Word { .. })
    }
}

/// Evaluate whether a word starts at `start`.
///
/// A word begins after a separator (or at buffer start), opens with
/// `min_letters` letters and runs until the next separator. Digits are
/// allowed once the leading letters are satisfied. Both outcomes report the
/// position of the separator that ends the run, so the caller never looks at
/// those bytes again.
#[must_use]
pub fn check_word(bytes: &[u8], start: usize, min_letters: usize) -> WordSpan {
    let len = bytes.len();
    let mut i = start;
    let mut rejected = false;

    if start > 0 && !is_separator(bytes[start - 1]) {
        rejected = true;
    } else {
        while i < start.saturating_add(min_letters) && i < len {
            if !is_letter(bytes[i]) {
                rejected = true;
                break;
            }
            i += 1;
        }
        // ran out of input before the leading letters were satisfied
        if i == len && i - start < min_letters {
            rejected = true;
        }
    }

    while i < len && !is_separator(bytes[i]) {
        i += 1;
    }

    if rejected {
        WordSpan::Rejected { resume: i }
    } else {
        WordSpan::Word { end: i }
    }
}

/// Single-pass iterator over the valid word spans of a normalized buffer.
///
/// The cursor only moves forward: after each candidate it jumps straight to
/// the separator that closes it, whether or not the candidate was a word.
#[derive(Debug, Clone)]
pub struct WordScanner<'a> {
    bytes: &'a [u8],
    min_letters: usize,
    cursor: usize,
}

impl<'a> WordScanner<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8], min_letters: usize) -> Self {
        Self {
            bytes,
            min_letters,
            cursor: 0,
        }
    }

    /// Current scan position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }
}

impl Iterator for WordScanner<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.bytes.len() {
            let start = self.cursor;
            if !is_letter(self.bytes[start]) {
                self.cursor += 1;
                continue;
            }

            let span = check_word(self.bytes, start, self.min_letters);
            let next = span.next_position();
            debug_assert!(next > start, "scanner cursor must advance");
            self.cursor = next;

            if span.is_word() {
                return Some(start..next);
            }
        }
        None
    }
}
