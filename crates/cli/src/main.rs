use clap::Parser;
use std::process::ExitCode;
use word_stats_cli::args::Args;
use word_stats_cli::config::Config;
use word_stats_cli::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init(config.verbosity);
    log::debug!("{config:?}");

    match word_stats_cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
