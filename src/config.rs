use crate::case::converter::Converter;
use crate::initialisms::Initialisms;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Initialisms recognized in addition to (or instead of) the built-in table
    #[serde(default)]
    pub initialisms: Vec<String>,

    #[serde(default = "default_use_builtin_initialisms")]
    pub use_builtin_initialisms: bool,
}

fn default_use_builtin_initialisms() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initialisms: Vec::new(),
            use_builtin_initialisms: default_use_builtin_initialisms(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!(
            "Loaded config from {} ({} extra initialisms)",
            path.display(),
            config.initialisms.len()
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration")
    }

    /// Layer `other` over `self`: extra initialisms accumulate, the builtin switch is replaced.
    pub fn merge(mut self, other: Self) -> Self {
        for word in other.initialisms {
            if !self.initialisms.contains(&word) {
                self.initialisms.push(word);
            }
        }
        self.use_builtin_initialisms = other.use_builtin_initialisms;
        self
    }

    pub fn initialisms(&self) -> Result<Initialisms> {
        let base = if self.use_builtin_initialisms {
            Initialisms::default()
        } else {
            Initialisms::empty()
        };
        base.with_extra(&self.initialisms)
            .context("Failed to build initialism table")
    }

    pub fn converter(&self) -> Result<Converter> {
        let initialisms = self.initialisms()?;
        log::debug!("Building converter with {} initialisms", initialisms.len());
        Ok(Converter::new(initialisms))
    }
}
