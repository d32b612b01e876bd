//! File-based defaults for chart construction and display.
//!
//! ```toml
//! [chart]
//! fix_leap = true
//! year_boundary = "lunar-new-year"
//!
//! [display]
//! locale = "zh-CN"
//! ```
//!
//! Every field is optional; an empty file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ziwei_base::{ChartOptions, YearBoundary};

/// Locale tag used when none is configured.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// `[chart]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub fix_leap: bool,
    pub year_boundary: YearBoundary,
}

impl Default for ChartSection {
    fn default() -> Self {
        let o = ChartOptions::default();
        Self {
            fix_leap: o.fix_leap,
            year_boundary: o.year_boundary,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// BCP-47 style tag, validated by the label layer.
    pub locale: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiweiConfig {
    pub chart: ChartSection,
    pub display: DisplaySection,
}

impl ZiweiConfig {
    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Chart options carried by the `[chart]` section.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            fix_leap: self.chart.fix_leap,
            year_boundary: self.chart.year_boundary,
        }
    }
}
