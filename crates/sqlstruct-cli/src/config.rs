//! Configuration file handling

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;

pub const CONFIG_FILE_NAME: &str = "sqlstruct.toml";

/// Configuration for sqlstruct
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Tag dialect (gorm, xorm)
    #[serde(default)]
    pub tags: Option<String>,

    /// Output format (go, json)
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .into_diagnostic()
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Try to find and load sqlstruct.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let current_dir = std::env::current_dir().into_diagnostic()?;
        match find_config(current_dir) {
            Some(path) => Ok(Some(Self::from_file(&path)?)),
            None => Ok(None),
        }
    }

    /// Merge CLI arguments into configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_with_args(mut self, tags: &Option<String>, format: &Option<OutputFormat>) -> Self {
        if tags.is_some() {
            self.tags = tags.clone();
        }

        if let Some(fmt) = format {
            self.format = Some(format!("{:?}", fmt).to_lowercase());
        }

        self
    }

    /// Resolved output format; unknown values fall back to the struct output
    pub fn output_format(&self) -> OutputFormat {
        match self.format.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Go,
        }
    }
}

/// Walk up from `dir` looking for sqlstruct.toml
fn find_config(mut dir: PathBuf) -> Option<PathBuf> {
    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Try parent directory
        if !dir.pop() {
            return None;
        }
    }
}
