// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "word_stats",
    version,
    about = "テキストの行数/文字数/単語数と頻出語の集計ツール"
)]
pub struct Args {
    /// 入力ファイル
    #[arg(short = 'i', long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub input: PathBuf,

    #[command(flatten)]
    pub analysis: AnalysisOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// ログを詳細にする (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisOptions {
    /// 1トークンあたりの単語数（2以上で連語を集計）
    #[arg(
        short = 'm',
        long,
        default_value_t = 1,
        value_parser = parsers::parse_positive_usize,
        help_heading = "集計"
    )]
    pub phrase_length: usize,

    /// 単語とみなす先頭英字の最小数
    #[arg(
        long,
        default_value_t = 4,
        value_parser = parsers::parse_min_letters,
        help_heading = "集計"
    )]
    pub min_letters: usize,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 上位N件のみ表示
    #[arg(short = 'n', long, default_value_t = 10, help_heading = "出力")]
    pub top: usize,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}
