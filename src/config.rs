//! Run configuration
//!
//! A single document carries both the run settings ([`ConfigFields`]) and
//! the phrase fragments ([`FormatFields`]) as sibling top-level keys:
//!
//! ```json
//! {
//!   "infile": "data/menu.csv",
//!   "outfile": "menu.txt",
//!   "parser": "CSV",
//!   "formatter": "NamedRow",
//!   "row_headers": 1,
//!   "col_headers": 1,
//!   "link": "If",
//!   "eq": "is",
//!   "x_label": "topping"
//! }
//! ```
//!
//! JSON is the default format; `.toml`, `.yaml` and `.yml` files are read
//! with the matching deserializer. Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::fields::FormatFields;
use crate::core::formatter::{CustomTemplate, FormatterKind};
use crate::parsers::ParserKind;
use crate::utils::error::{ConversionError, ConversionResult, ConversionWarning};
use crate::utils::files::{read_input, write_text};

/// Config file used when none is given
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Snapshot of the most recent run
pub const LASTRUN_PATH: &str = "./lastrun.json";

/// Input, output and variant selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFields {
    /// Leading columns counted as each row's header
    pub row_headers: usize,
    /// Leading rows counted as each column's header
    pub col_headers: usize,
    /// File holding the tabular data
    pub infile: String,
    /// Text file receiving the sentences; empty means stdout
    pub outfile: String,
    /// Formatter name
    pub formatter: String,
    /// Parser name, matching the input format
    pub parser: String,
}

/// Everything one run needs, as read from a config document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub config: ConfigFields,
    #[serde(flatten)]
    pub fields: FormatFields,
    /// Per-cell template that replaces the named formatter when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Serialization formats accepted for config documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension, defaulting to JSON
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

impl RunConfig {
    /// Read a config document, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> ConversionResult<Self> {
        let path = path.as_ref();
        let text = read_input(path)?;
        let config = Self::from_str_as(&text, ConfigFormat::from_path(path))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Decode a config document held in memory
    pub fn from_str_as(text: &str, format: ConfigFormat) -> ConversionResult<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(text).map_err(ConversionError::config),
            ConfigFormat::Toml => toml::from_str(text).map_err(ConversionError::config),
            ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(ConversionError::config),
        }
    }

    /// Pretty JSON form of the merged config, as stored in the lastrun snapshot
    pub fn to_json(&self) -> ConversionResult<String> {
        serde_json::to_string_pretty(self).map_err(ConversionError::config)
    }

    /// Write the lastrun snapshot to `path`
    pub fn save_lastrun(&self, path: impl AsRef<Path>) -> ConversionResult<()> {
        write_text(path, &self.to_json()?)
    }

    /// Configured formatter, or the default plus a warning
    pub fn formatter(&self) -> (FormatterKind, Option<ConversionWarning>) {
        FormatterKind::resolve(&self.config.formatter)
    }

    /// Configured parser, or CSV plus a warning
    pub fn parser(&self) -> (ParserKind, Option<ConversionWarning>) {
        ParserKind::resolve(&self.config.parser)
    }

    pub fn custom_template(&self) -> Option<CustomTemplate> {
        self.template.as_deref().map(CustomTemplate::new)
    }
}
