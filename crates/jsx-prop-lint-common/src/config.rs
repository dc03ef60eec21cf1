use crate::linter::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up next to linted files
pub const CONFIG_FILE_NAME: &str = ".jsx-prop-lint.toml";

/// Template written by `jsx-prop-lint config init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# jsx-prop-lint configuration

[color]
# "auto" (default), "always" or "never"
ui = "auto"
error = "red"
warning = "yellow"

[rules.jsx-sort-props]
enabled = true
severity = "warning"
# Attribute that must come first in every run of attributes
first = "templateName"
"#;

/// Configuration for jsx-prop-lint loaded from .jsx-prop-lint.toml
#[derive(Debug, Default, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
    #[serde(default)]
    pub color: ColorConfig,
}

/// Color output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ColorConfig {
    /// Color mode: "auto" (default), "always" or "never"
    #[serde(default)]
    pub ui: ColorMode,
    #[serde(default = "default_error_color")]
    pub error: Color,
    #[serde(default = "default_warning_color")]
    pub warning: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            ui: ColorMode::default(),
            error: default_error_color(),
            warning: default_warning_color(),
        }
    }
}

fn default_error_color() -> Color {
    Color::Red
}

fn default_warning_color() -> Color {
    Color::Yellow
}

/// Color mode for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Automatically detect (default) - respects NO_COLOR env and terminal detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl<'de> Deserialize<'de> for ColorMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(D::Error::custom(format!(
                "invalid color mode '{}', expected 'auto', 'always', or 'never'",
                s
            ))),
        }
    }
}

/// Terminal colors usable for severity labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Configuration for a specific lint rule
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Overrides the rule's default severity ("error" or "warning")
    pub severity: Option<String>,
    /// Attribute name that must come first (jsx-sort-props)
    pub first: Option<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
            first: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl RuleConfig {
    /// Configured severity, ignoring names that are not recognized
    pub fn severity(&self) -> Option<Severity> {
        let name = self.severity.as_deref()?;
        let severity = Severity::from_name(name);
        if severity.is_none() {
            log::warn!(
                "unknown severity '{}', expected 'error' or 'warning'; using the rule default",
                name
            );
        }
        severity
    }
}

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["rules", "color"];
const KNOWN_COLOR_KEYS: &[&str] = &["ui", "error", "warning"];
const KNOWN_RULE_KEYS: &[&str] = &["enabled", "severity", "first"];

impl LintConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Find .jsx-prop-lint.toml in the given directory or its parents
    pub fn find(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|config_path| config_path.exists())
    }

    /// Find and load .jsx-prop-lint.toml from the given directory or its parents
    pub fn find_and_load(dir: &Path) -> Option<Self> {
        let config_path = Self::find(dir)?;
        log::debug!("using config {}", config_path.display());

        match Self::from_file(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Check a configuration file for unknown keys and invalid values
    ///
    /// Returns the list of problems found; an empty list means the file is valid.
    pub fn validate_file(path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let value: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut errors = Vec::new();
        for (key, item) in &value {
            if !KNOWN_TOP_LEVEL_KEYS.contains(&key.as_str()) {
                errors.push(format!("unknown key '{}'", key));
                continue;
            }
            let Some(table) = item.as_table() else {
                errors.push(format!("'{}' must be a table", key));
                continue;
            };

            if key == "color" {
                errors.extend(
                    table
                        .keys()
                        .filter(|k| !KNOWN_COLOR_KEYS.contains(&k.as_str()))
                        .map(|k| format!("unknown key 'color.{}'", k)),
                );
                continue;
            }

            for (rule, rule_item) in table {
                let Some(rule_table) = rule_item.as_table() else {
                    errors.push(format!("'rules.{}' must be a table", rule));
                    continue;
                };
                for (k, v) in rule_table {
                    if !KNOWN_RULE_KEYS.contains(&k.as_str()) {
                        errors.push(format!("unknown key 'rules.{}.{}'", rule, k));
                    } else if k == "severity"
                        && v.as_str().and_then(Severity::from_name).is_none()
                    {
                        errors.push(format!(
                            "invalid severity for 'rules.{}', expected 'error' or 'warning'",
                            rule
                        ));
                    }
                }
            }
        }

        // Catch type errors the key walk does not see (e.g. a bad color name)
        if errors.is_empty() {
            if let Err(e) = Self::parse(&content) {
                errors.push(e.message().to_string());
            }
        }

        Ok(errors)
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        self.rules.get(name).map(|r| r.enabled).unwrap_or(true)
    }

    /// Get the configuration for a specific rule
    pub fn get_rule_config(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Get the color mode setting
    pub fn color_mode(&self) -> ColorMode {
        self.color.ui
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
