use crate::config::AnalysisConfig;
use crate::counter::count_lines_and_chars;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::normalize::normalize;
use crate::phrase::check_phrase;
use crate::scanner::WordScanner;
use crate::stats::AnalysisResult;
use alloc::string::String;
use core::ops::Range;

/// Analyze a raw document.
///
/// This is the core entry point for the library. Non-ASCII bytes are
/// discarded and letters folded to lowercase before anything is counted; the
/// returned ranking is complete, callers decide how much of it to show.
///
/// # Errors
/// Returns [`crate::AnalysisError::InvalidConfiguration`] when `config` fails
/// validation. Any byte sequence, including an empty one, is valid input.
pub fn analyze(raw: &[u8], config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate()?;

    let bytes = normalize(raw);
    log::debug!(
        "normalized {} raw bytes to {} ascii bytes",
        raw.len(),
        bytes.len()
    );

    let counts = count_lines_and_chars(&bytes);

    let mut table = FrequencyTable::new();
    let mut words = 0;
    for word in WordScanner::new(&bytes, config.min_leading_letters) {
        words += 1;
        let token = if config.phrase_length == 1 {
            Some(word)
        } else {
            check_phrase(
                &bytes,
                word.start,
                config.min_leading_letters,
                config.phrase_length,
            )
        };
        if let Some(span) = token {
            table.record(&token_text(&bytes, span), 1);
        }
    }

    log::debug!(
        "{} lines, {} chars, {} words, {} distinct tokens",
        counts.lines,
        counts.chars,
        words,
        table.len()
    );

    Ok(AnalysisResult::from_parts(counts, words, table.rank()))
}

/// `analyze` with the default leading-letter rule.
///
/// # Errors
/// Returns [`crate::AnalysisError::InvalidConfiguration`] if `phrase_length` is 0.
pub fn analyze_with_phrase_length(raw: &[u8], phrase_length: usize) -> Result<AnalysisResult> {
    analyze(raw, &AnalysisConfig::with_phrase_length(phrase_length))
}

// Normalized bytes are all ASCII, so each maps to exactly one char.
fn token_text(bytes: &[u8], span: Range<usize>) -> String {
    bytes[span].iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::frequency::FrequencyEntry;
    use alloc::borrow::ToOwned;
    use alloc::vec::Vec;

    fn entries(result: &AnalysisResult) -> Vec<(&str, u64)> {
        result
            .ranked
            .iter()
            .map(|e| (e.token.as_str(), e.count))
            .collect()
    }

    #[test]
    fn empty_input_is_all_zero() {
        let result = analyze(b"", &AnalysisConfig::default()).unwrap();
        assert_eq!(result, AnalysisResult::new());
    }

    #[test]
    fn minimum_leading_letters() {
        let result = analyze_with_phrase_length(b"cat dog bird", 1).unwrap();
        assert_eq!(result.words, 1);
        assert_eq!(entries(&result), [("bird", 1)]);
    }

    #[test]
    fn case_folding_merges_tokens() {
        let result = analyze_with_phrase_length(b"Word word WORD", 1).unwrap();
        assert_eq!(result.words, 3);
        assert_eq!(
            result.ranked.as_slice(),
            [FrequencyEntry {
                token: "word".to_owned(),
                count: 3
            }]
        );
    }

    #[test]
    fn line_and_char_counts() {
        let result = analyze_with_phrase_length(b"abc\n\n  \ndef", 1).unwrap();
        assert_eq!(result.lines, 2);
        assert_eq!(result.chars, 11);
        assert_eq!(result.words, 0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn non_ascii_bytes_are_not_counted() {
        let result = analyze_with_phrase_length("na\u{ef}ve\r\n".as_bytes(), 1).unwrap();
        // "naive" without the i: "nave" plus \r\n as one char
        assert_eq!(result.chars, 5);
        assert_eq!(entries(&result), [("nave", 1)]);
    }

    #[test]
    fn phrase_does_not_cross_line_break() {
        let result = analyze_with_phrase_length(b"well known\nfact", 2).unwrap();
        assert_eq!(result.words, 3);
        assert_eq!(entries(&result), [("well known", 1)]);
    }

    #[test]
    fn phrases_slide_word_by_word() {
        let result =
            analyze_with_phrase_length(b"great scott great scott great", 2).unwrap();
        assert_eq!(result.words, 5);
        assert_eq!(
            entries(&result),
            [("great scott", 2), ("scott great", 2)]
        );
    }

    #[test]
    fn phrase_with_punctuation_gap_is_dropped() {
        let result = analyze_with_phrase_length(b"hello, world peace", 2).unwrap();
        assert_eq!(entries(&result), [("world peace", 1)]);
    }

    #[test]
    fn ranking_breaks_ties_alphabetically() {
        let result =
            analyze_with_phrase_length(b"zeta alpha zeta beta alpha gamma", 1).unwrap();
        assert_eq!(
            entries(&result),
            [("alpha", 2), ("zeta", 2), ("beta", 1), ("gamma", 1)]
        );
    }

    #[test]
    fn custom_min_letters() {
        let config = AnalysisConfig {
            min_leading_letters: 2,
            phrase_length: 1,
        };
        let result = analyze(b"go to a b4 x1", &config).unwrap();
        assert_eq!(entries(&result), [("go", 1), ("to", 1)]);
    }

    #[test]
    fn huge_min_letters_counts_nothing() {
        let config = AnalysisConfig {
            min_leading_letters: usize::MAX,
            phrase_length: 1,
        };
        let result = analyze(b"ab abcd", &config).unwrap();
        assert_eq!(result.words, 0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn invalid_phrase_length_fails_fast() {
        let err = analyze_with_phrase_length(b"some text here", 0).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfiguration(_)));
    }

    #[test]
    fn analysis_is_repeatable() {
        let input = b"Repeat repeat, again AGAIN and again\r\nrepeat";
        let first = analyze_with_phrase_length(input, 1).unwrap();
        let second = analyze_with_phrase_length(input, 1).unwrap();
        assert_eq!(first, second);
    }
}
