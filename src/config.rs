//! Settings file parsing.
//!
//! This module handles loading the optional TOML settings file and merging it
//! with command-line overrides into the effective [`Settings`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{paths, scripts, vars};
use crate::errors::SettingsError;
use crate::variables::MaskPolicy;

/// Settings file structure. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Definitions file to read variables from.
    #[serde(default)]
    pub definitions_file: Option<PathBuf>,
    /// Mask sensitive values when printing them.
    #[serde(default)]
    pub mask_sensitive: Option<bool>,
    /// Keys treated as sensitive; replaces the default list.
    #[serde(default)]
    pub sensitive_keys: Option<Vec<String>>,
    /// Interpreter the step scripts are run with.
    #[serde(default)]
    pub shell: Option<String>,
}

impl SettingsFile {
    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::ReadError(format!("{}: {}", path.display(), e)))?;
        let settings: SettingsFile = toml::from_str(&content)
            .map_err(|e| SettingsError::ParseError(e.to_string()))
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(settings)
    }
}

/// Values taken from the command line, each overriding the settings file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub definitions_file: Option<PathBuf>,
    pub show_values: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub definitions_file: PathBuf,
    pub mask: MaskPolicy,
    pub shell: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            definitions_file: PathBuf::from(paths::DEFINITIONS_FILE),
            mask: MaskPolicy::default(),
            shell: scripts::DEFAULT_SHELL.to_string(),
        }
    }
}

impl Settings {
    /// Merge a settings file (if any) and command-line overrides over the defaults.
    pub fn resolve(file: Option<SettingsFile>, overrides: &Overrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        let definitions_file = overrides
            .definitions_file
            .clone()
            .or(file.definitions_file)
            .unwrap_or(defaults.definitions_file);

        let mask_enabled = !overrides.show_values && file.mask_sensitive.unwrap_or(true);
        let sensitive_keys = file.sensitive_keys.unwrap_or_else(|| {
            vars::DEFAULT_SENSITIVE_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect()
        });

        let shell = file
            .shell
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.shell);

        Self {
            definitions_file,
            mask: MaskPolicy {
                enabled: mask_enabled,
                sensitive_keys,
            },
            shell,
        }
    }
}
