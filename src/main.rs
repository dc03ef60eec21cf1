mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command.take() {
        Some(Commands::Config { command }) => cli::config::run_config(&command),
        Some(Commands::Why { rule, list }) => cli::why::run_why(rule, list),
        None => cli::lint::run_lint(cli),
    }
}
