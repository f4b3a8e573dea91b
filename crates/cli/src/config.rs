// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;
use word_stats_core::AnalysisConfig;

/// Number of ranked entries printed when `--top` is not given.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub input: PathBuf,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub analysis: AnalysisConfig,
    #[builder(default)]
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let analysis = AnalysisConfig {
            min_leading_letters: args.analysis.min_letters,
            phrase_length: args.analysis.phrase_length,
        };

        Self {
            input: args.input,
            output: args.output.output,
            top_n: args.output.top,
            format: args.output.format,
            analysis,
            verbosity: args.verbose,
        }
    }
}
