use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `characters: N` / `words: N` / `lines: N` followed by `<token>: count`
    #[default]
    Text,
    Json,
}
