pub mod config;
pub mod inputs;
pub mod lint;
pub mod why;

use clap::{Parser, Subcommand, ValueEnum};
use jsx_prop_lint::{ColorMode, OutputFormat, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsx-prop-lint")]
#[command(version, about = "Check that templateName comes first among JSX props")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tree files written by the parser, or directories searched for `*.tree.json`
    #[arg(value_name = "TREE")]
    pub inputs: Vec<PathBuf>,

    /// Source file described by the tree, instead of its `file` entry
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Prop that must come first, overriding the configuration
    #[arg(long, value_name = "NAME", value_parser = parse_prop_name)]
    pub first: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reorder props in the source files
    #[arg(long)]
    pub fix: bool,

    /// Path to configuration file (default: nearest .jsx-prop-lint.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to color the output (default: `[color] ui` from the configuration)
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,

    /// Log what is being loaded and checked
    #[arg(short, long)]
    pub verbose: bool,

    /// Lowest severity that makes the run exit with 1
    #[arg(long, value_enum, value_name = "SEVERITY", default_value = "warning")]
    pub fail_on: FailOn,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create, check or inspect .jsx-prop-lint.toml
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
    /// Explain a rule
    Why {
        /// Rule name (e.g., "jsx-sort-props")
        rule: Option<String>,

        /// List all available rules
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Fail on any reported problem
    Warning,
    /// Fail only on errors
    Error,
}

impl FailOn {
    pub fn fails(self, severity: Severity) -> bool {
        match self {
            FailOn::Warning => true,
            FailOn::Error => severity == Severity::Error,
        }
    }
}

/// Accept a JSX prop name such as `templateName`, `data-role` or `xlink:href`
pub fn parse_prop_name(name: &str) -> Result<String, String> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '$'));
    if valid {
        Ok(name.to_string())
    } else {
        Err(format!("'{}' is not a prop name", name))
    }
}
