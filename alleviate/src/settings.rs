use crate::error::{AlleviateError, Result, ResultExt};
use crate::renderers::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "alleviate.toml";

/// Tunables for report construction and output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum similarity (exclusive) for a file to be suggested
    pub cutoff: f64,
    /// Maximum number of similar files listed as solutions
    pub max_suggestions: usize,
    /// Renderer used when the caller does not pick one
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cutoff: 0.75,
            max_suggestions: 3,
            format: OutputFormat::Detailed,
        }
    }
}

impl Settings {
    /// Read settings from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `explicit` if given, else `alleviate.toml` in the working
    /// directory if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = DEFAULT_CONFIG_FILE, "loading settings from working directory");
            return Self::from_file(fallback);
        }

        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(AlleviateError::InvalidSetting(format!(
                "cutoff must be between 0.0 and 1.0, got {}",
                self.cutoff
            )));
        }
        if self.max_suggestions == 0 {
            return Err(AlleviateError::InvalidSetting(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
