//! Phrase fragments interpolated into sentence templates

use serde::{Deserialize, Serialize};

/// User-supplied words and clauses for the formatters
///
/// Every field is optional in config files and defaults to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatFields {
    /// Delimiter between headers when several cells make up one header
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delim: String,
    /// Clause linking labels to the rest of the sentence
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// Statement of equality between labels and values
    #[serde(skip_serializing_if = "String::is_empty")]
    pub eq: String,
    /// Preamble clause setting the context for labels and values
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pre: String,
    /// Category label for cell values
    #[serde(skip_serializing_if = "String::is_empty")]
    pub val_label: String,
    /// Category label for rows
    #[serde(skip_serializing_if = "String::is_empty")]
    pub x_label: String,
    /// Category label for columns
    #[serde(skip_serializing_if = "String::is_empty")]
    pub y_label: String,
}

impl FormatFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = delim.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_eq(mut self, eq: impl Into<String>) -> Self {
        self.eq = eq.into();
        self
    }

    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = pre.into();
        self
    }

    pub fn with_val_label(mut self, label: impl Into<String>) -> Self {
        self.val_label = label.into();
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }
}
