use serde::{Deserialize, Serialize};

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Line and character totals for one normalized buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    /// Lines holding at least one non-blank byte.
    pub lines: usize,
    /// Bytes, with each `\r\n` pair counted once.
    pub chars: usize,
}

/// ASCII control codes, space and DEL.
#[inline]
#[must_use]
pub const fn is_blank(b: u8) -> bool {
    b <= b' ' || b == 0x7f
}

/// Count content lines and logical characters in one pass.
///
/// A line is counted when the bytes between its terminator and the previous
/// `\n` contain something other than blanks. When the buffer does not end
/// with `\n`, the final line is scanned from the second-to-last byte
/// backwards, so a final line whose only content is the very last byte is
/// not counted (`"ab\nc"` has one content line).
#[must_use]
pub fn count_lines_and_chars(bytes: &[u8]) -> TextCounts {
    let mut counts = TextCounts::default();

    let Some(&last) = bytes.last() else {
        return counts;
    };

    for (i, &b) in bytes.iter().enumerate() {
        if b == LF {
            if line_has_content(bytes, i) {
                counts.lines += 1;
            }
            if i > 0 && bytes[i - 1] == CR {
                continue;
            }
        }
        counts.chars += 1;
    }

    if last != LF && line_has_content(bytes, bytes.len() - 1) {
        counts.lines += 1;
    }

    log::trace!(
        "counted {} content lines, {} chars over {} bytes",
        counts.lines,
        counts.chars,
        bytes.len()
    );
    counts
}

/// Whether the bytes before `line_end`, back to the previous `\n`, hold any
/// non-blank byte. `line_end` itself is not inspected.
fn line_has_content(bytes: &[u8], line_end: usize) -> bool {
    bytes[..line_end]
        .iter()
        .rev()
        .take_while(|&&b| b != LF)
        .any(|&b| !is_blank(b))
}
