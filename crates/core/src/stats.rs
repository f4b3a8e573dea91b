use crate::counter::TextCounts;
use crate::frequency::RankedList;
use serde::{Deserialize, Serialize};

/// Pure analysis result, independent of where the bytes came from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Lines with at least one non-blank character.
    pub lines: usize,
    /// Characters, `\r\n` counted once.
    pub chars: usize,
    /// Valid words, also in phrase mode.
    pub words: usize,
    /// Full frequency ranking of words (or phrases).
    pub ranked: RankedList,
}

impl AnalysisResult {
    /// Creates a new default `AnalysisResult`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(counts: TextCounts, words: usize, ranked: RankedList) -> Self {
        Self {
            lines: counts.lines,
            chars: counts.chars,
            words,
            ranked,
        }
    }
}
