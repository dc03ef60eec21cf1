use super::parse_prop_name;
use clap::Subcommand;
use colored::Colorize;
use jsx_prop_lint::LintConfig;
use jsx_prop_lint::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use jsx_prop_lint::rules::JsxSortProps;
use jsx_prop_lint::rules::style::jsx_sort_props::{DEFAULT_FIRST, DOC};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a starter .jsx-prop-lint.toml
    Init {
        /// Where to write the file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Prop that must come first
        #[arg(long, value_name = "NAME", value_parser = parse_prop_name)]
        first: Option<String>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Check a configuration file and print the rule settings it yields
    Validate {
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
    },
    /// Show which configuration applies to a directory
    Show {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

pub fn run_config(command: &ConfigCommands) -> ExitCode {
    match command {
        ConfigCommands::Init {
            output,
            first,
            force,
        } => run_init(output, first.as_deref(), *force),
        ConfigCommands::Validate { config } => run_validate(config),
        ConfigCommands::Show { dir } => run_show(dir),
    }
}

/// Starter configuration with `first` as the distinguished prop
fn render_template(first: Option<&str>) -> String {
    match first {
        Some(name) => DEFAULT_CONFIG_TEMPLATE.replace(
            &format!("first = \"{}\"", DEFAULT_FIRST),
            &format!("first = \"{}\"", name),
        ),
        None => DEFAULT_CONFIG_TEMPLATE.to_string(),
    }
}

fn run_init(output: &Path, first: Option<&str>, force: bool) -> ExitCode {
    if output.exists() && !force {
        eprintln!(
            "Error: {} already exists. Use --force to overwrite.",
            output.display()
        );
        return ExitCode::from(1);
    }

    match fs::write(output, render_template(first)) {
        Ok(()) => {
            eprintln!(
                "Created {} ('{}' first)",
                output.display(),
                first.unwrap_or(DEFAULT_FIRST)
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output.display(), e);
            ExitCode::from(2)
        }
    }
}

fn run_validate(config_path: &Path) -> ExitCode {
    let problems = match LintConfig::validate_file(config_path) {
        Ok(problems) => problems,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::from(2);
        }
    };

    if !problems.is_empty() {
        eprintln!("{}:", config_path.display());
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        eprintln!("\nFound {} problem(s)", problems.len());
        return ExitCode::from(1);
    }

    match LintConfig::from_file(config_path) {
        Ok(config) => {
            eprintln!("{}: {}", config_path.display(), "OK".green());
            eprintln!("  {}", describe_rule(Some(&config)));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run_show(dir: &Path) -> ExitCode {
    let Some(config_path) = LintConfig::find(dir) else {
        eprintln!("No {} found for {}; using defaults", CONFIG_FILE_NAME, dir.display());
        eprintln!("  {}", describe_rule(None));
        return ExitCode::SUCCESS;
    };

    match LintConfig::from_file(&config_path) {
        Ok(config) => {
            eprintln!("Using {}", config_path.display());
            eprintln!("  {}", describe_rule(Some(&config)));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// One line summary of the effective jsx-sort-props settings
fn describe_rule(config: Option<&LintConfig>) -> String {
    if config.is_some_and(|c| !c.is_rule_enabled(DOC.name)) {
        return format!("{}: disabled", DOC.name);
    }

    let rule = JsxSortProps::from_config(config.and_then(|c| c.get_rule_config(DOC.name)));
    format!(
        "{}: {}, '{}' first",
        DOC.name,
        rule.severity().to_string().to_lowercase(),
        rule.first()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_with_first() {
        let text = render_template(Some("slot"));
        let config = LintConfig::parse(&text).unwrap();
        let rule = config.get_rule_config(DOC.name).unwrap();
        assert_eq!(rule.first.as_deref(), Some("slot"));
    }

    #[test]
    fn test_render_template_default() {
        assert_eq!(render_template(None), DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn test_describe_rule() {
        assert_eq!(
            describe_rule(None),
            "jsx-sort-props: warning, 'templateName' first"
        );

        let config =
            LintConfig::parse("[rules.jsx-sort-props]\nseverity = \"error\"\nfirst = \"slot\"\n")
                .unwrap();
        assert_eq!(
            describe_rule(Some(&config)),
            "jsx-sort-props: error, 'slot' first"
        );

        let disabled = LintConfig::parse("[rules.jsx-sort-props]\nenabled = false\n").unwrap();
        assert_eq!(describe_rule(Some(&disabled)), "jsx-sort-props: disabled");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "# mine\n").unwrap();

        let _ = run_init(&path, None, false);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        let _ = run_init(&path, Some("slot"), true);
        assert!(fs::read_to_string(&path).unwrap().contains("first = \"slot\""));
    }
}
