use crate::error::{AnalysisError, Result};
use alloc::format;

/// Minimum number of letters a word has to start with.
pub const DEFAULT_MIN_LEADING_LETTERS: usize = 4;

/// Words per counted token when phrase mode is off.
pub const DEFAULT_PHRASE_LENGTH: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub min_leading_letters: usize,
    pub phrase_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_leading_letters: DEFAULT_MIN_LEADING_LETTERS,
            phrase_length: DEFAULT_PHRASE_LENGTH,
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn with_phrase_length(phrase_length: usize) -> Self {
        Self {
            phrase_length,
            ..Self::default()
        }
    }

    /// Reject parameters the scanner has no meaning for.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidConfiguration`] if either value is zero.
    pub fn validate(&self) -> Result<()> {
        if self.phrase_length < 1 {
            return Err(AnalysisError::InvalidConfiguration(format!(
                "phrase length must be at least 1 (got {})",
                self.phrase_length
            )));
        }
        if self.min_leading_letters < 1 {
            return Err(AnalysisError::InvalidConfiguration(format!(
                "minimum leading letters must be at least 1 (got {})",
                self.min_leading_letters
            )));
        }
        Ok(())
    }
}
