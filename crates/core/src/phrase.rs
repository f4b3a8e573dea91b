use crate::scanner::{WordSpan, check_word, is_separator};
use core::ops::Range;

const LF: u8 = b'\n';
const SPACE: u8 = b' ';

/// Try to build a phrase of exactly `phrase_length` words starting at `start`.
///
/// Every word must pass [`check_word`]. The gap between two words may only
/// contain spaces (one or more), and a phrase never reaches across a line
/// break. On success the span covers the first word's start through the last
/// word's end, internal spaces included.
#[must_use]
pub fn check_phrase(
    bytes: &[u8],
    start: usize,
    min_letters: usize,
    phrase_length: usize,
) -> Option<Range<usize>> {
    let len = bytes.len();
    let mut cursor = start;

    for k in 0..phrase_length {
        let WordSpan::Word { end } = check_word(bytes, cursor, min_letters) else {
            return None;
        };
        cursor = end;

        if k + 1 == phrase_length {
            break;
        }
        if touches_newline(bytes, cursor) {
            return None;
        }
        while cursor < len && is_separator(bytes[cursor]) {
            if bytes[cursor] != SPACE {
                return None;
            }
            cursor += 1;
        }
        // input ended before the remaining words
        if cursor == len {
            return None;
        }
    }

    Some(start..cursor)
}

/// `\n` at the word end or right after it (`\r\n`, `" \n"`).
fn touches_newline(bytes: &[u8], word_end: usize) -> bool {
    word_end + 1 < bytes.len() && (bytes[word_end] == LF || bytes[word_end + 1] == LF)
}
