use super::Cli;
use super::inputs::{Input, collect_inputs};
use clap::CommandFactory;
use colored::control;
use jsx_prop_lint::rules::style::jsx_sort_props::DOC;
use jsx_prop_lint::{
    ColorMode, Document, LintConfig, LintError, Linter, Reporter, TreeError, apply_fixes, linter,
    load_document, load_document_with_source,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Result of linting a single tree file
enum FileResult {
    LoadError {
        tree: PathBuf,
        error: TreeError,
    },
    LintErrors {
        source: PathBuf,
        errors: Vec<LintError>,
    },
}

fn load(input: &Input) -> Result<Document, TreeError> {
    match &input.source {
        Some(source) => load_document_with_source(&input.tree, source),
        None => load_document(&input.tree),
    }
}

/// Load one tree with its source and run the linter on it
fn lint_file(input: &Input, linter: &Linter) -> FileResult {
    let document = match load(input) {
        Ok(document) => document,
        Err(error) => {
            return FileResult::LoadError {
                tree: input.tree.clone(),
                error,
            };
        }
    };

    let source = document
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.tree.clone());
    let errors = linter.lint(&document);
    log::debug!("{}: {} error(s)", source.display(), errors.len());

    FileResult::LintErrors { source, errors }
}

/// Apply fixes and return the errors left in the file, or `None` if it could not be written
fn fix_file(source: &Path, errors: &[LintError]) -> Option<Vec<LintError>> {
    match apply_fixes(source, errors) {
        Ok(outcome) => {
            if outcome.applied > 0 {
                eprintln!(
                    "Applied {} fix(es) to {}",
                    outcome.applied,
                    source.display()
                );
            }
            Some(outcome.remaining.into_iter().cloned().collect())
        }
        Err(e) => {
            eprintln!("Error applying fixes to {}: {}", source.display(), e);
            None
        }
    }
}

/// The config given with `--config`, else the nearest one, with `--first` applied
fn load_config(cli: &Cli) -> Result<LintConfig, ExitCode> {
    let mut config = match &cli.config {
        Some(path) => LintConfig::from_file(path).map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        })?,
        None => {
            let search_dir = cli
                .inputs
                .first()
                .and_then(|p| if p.is_dir() { Some(p.as_path()) } else { p.parent() })
                .unwrap_or(Path::new("."));
            LintConfig::find_and_load(search_dir).unwrap_or_default()
        }
    };

    if let Some(first) = &cli.first {
        config.rules.entry(DOC.name.to_string()).or_default().first = Some(first.clone());
    }
    Ok(config)
}

pub fn run_lint(cli: Cli) -> ExitCode {
    if cli.inputs.is_empty() {
        let _ = Cli::command().print_help();
        eprintln!();
        return ExitCode::from(2);
    }

    let inputs = match collect_inputs(&cli.inputs, cli.source.as_deref()) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(code) => return code,
    };

    // The command line wins over `[color] ui`
    match cli.color.map(ColorMode::from).unwrap_or(config.color_mode()) {
        ColorMode::Always => control::set_override(true),
        ColorMode::Never => control::set_override(false),
        ColorMode::Auto => {}
    }

    let reporter = Reporter::with_colors(cli.format, config.color.clone());
    let linter = linter::with_config(Some(&config));
    log::info!(
        "checking {} tree file(s) with {} rule(s)",
        inputs.len(),
        linter.rules().len()
    );

    // Fixing writes files, so it runs in order
    let results: Vec<FileResult> = if cli.fix {
        inputs.iter().map(|input| lint_file(input, &linter)).collect()
    } else {
        inputs
            .par_iter()
            .map(|input| lint_file(input, &linter))
            .collect()
    };

    let mut failed = false;
    let mut has_fatal_error = false;

    for result in results {
        let (source, errors) = match result {
            FileResult::LoadError { tree, error } => {
                eprintln!("Error loading {}: {}", tree.display(), error);
                has_fatal_error = true;
                continue;
            }
            FileResult::LintErrors { source, errors } => (source, errors),
        };

        let remaining = if cli.fix {
            match fix_file(&source, &errors) {
                Some(remaining) => remaining,
                None => {
                    has_fatal_error = true;
                    errors
                }
            }
        } else {
            errors
        };

        if !remaining.is_empty() {
            reporter.report(&remaining, &source);
        }
        failed |= remaining.iter().any(|e| cli.fail_on.fails(e.severity));
    }

    if has_fatal_error {
        ExitCode::from(2)
    } else if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
