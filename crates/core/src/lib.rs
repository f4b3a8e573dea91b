#![no_std]
#![allow(clippy::cargo_common_metadata)]

//! Byte-level text statistics: content lines, logical characters, words and
//! ranked word/phrase frequencies over the ASCII subset of a document.

extern crate alloc;

pub mod analyzer;
pub mod config;
pub mod counter;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod phrase;
pub mod scanner;
pub mod stats;

pub use analyzer::{analyze, analyze_with_phrase_length};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use frequency::{FrequencyEntry, FrequencyTable, RankedList};
pub use stats::AnalysisResult;
