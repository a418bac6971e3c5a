//! Export configuration

use serde::{Deserialize, Serialize};
use sf_core::SfError;

/// Output serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Shot descriptions separated by the configured separator
    PlainText,
    /// `1. description` lines, numbered by position
    NumberedList,
    /// Full payload object with shots, totals, config, timestamp
    Json,
    /// Fixed-header spreadsheet rows
    Csv,
}

impl ExportFormat {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PlainText => "Plain Text",
            Self::NumberedList => "Numbered List",
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }

    /// Conventional file extension for this format
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::PlainText | Self::NumberedList => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = SfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" | "plain_text" | "txt" => Ok(Self::PlainText),
            "numbered" | "numbered_list" | "list" => Ok(Self::NumberedList),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(SfError::InvalidParam(format!(
                "unknown export format: {other}"
            ))),
        }
    }
}

/// Separator between shots in the text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotSeparator {
    /// One blank line between shots
    DoubleNewline,
    /// Shots on consecutive lines
    SingleNewline,
}

impl ShotSeparator {
    /// The literal separator string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DoubleNewline => "\n\n",
            Self::SingleNewline => "\n",
        }
    }
}

impl Default for ShotSeparator {
    fn default() -> Self {
        Self::DoubleNewline
    }
}

/// Full export configuration.
///
/// `prefix` and `suffix` are templates wrapped around every shot
/// description; both run through variable substitution before they are
/// applied. Stored configs load with defaults for any missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Prepended to every shot description
    pub prefix: String,

    /// Appended to every shot description
    pub suffix: String,

    /// Output format
    pub format: ExportFormat,

    /// Separator for the text formats
    pub separator: ShotSeparator,

    /// Append chapter/section/style annotations in the text formats
    pub include_metadata: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            format: ExportFormat::PlainText,
            separator: ShotSeparator::DoubleNewline,
            include_metadata: false,
        }
    }
}

impl ExportConfig {
    /// Default config for the given format
    pub fn for_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Numbered list with metadata annotations, the review-sheet preset
    pub fn review_sheet() -> Self {
        Self {
            format: ExportFormat::NumberedList,
            include_metadata: true,
            ..Self::default()
        }
    }

    /// Set the per-shot prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the per-shot suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the text-format separator
    pub fn with_separator(mut self, separator: ShotSeparator) -> Self {
        self.separator = separator;
        self
    }

    /// Toggle metadata annotations
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "plain_text".parse::<ExportFormat>().unwrap(),
            ExportFormat::PlainText
        );
        assert_eq!(
            "NUMBERED".parse::<ExportFormat>().unwrap(),
            ExportFormat::NumberedList
        );
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_serializes_snake_case() {
        let json = serde_json::to_string(&ExportFormat::NumberedList).unwrap();
        assert_eq!(json, "\"numbered_list\"");
    }

    #[test]
    fn test_builder_chain() {
        let config = ExportConfig::for_format(ExportFormat::Csv)
            .with_prefix("EXT. ")
            .with_suffix(" [@artist]")
            .with_separator(ShotSeparator::SingleNewline);

        assert_eq!(config.format, ExportFormat::Csv);
        assert_eq!(config.prefix, "EXT. ");
        assert_eq!(config.separator, ShotSeparator::SingleNewline);
    }

    #[test]
    fn test_config_tolerates_partial_json() {
        let config: ExportConfig = serde_json::from_str(r#"{"format":"csv"}"#).unwrap();
        assert_eq!(config.format, ExportFormat::Csv);
        assert_eq!(config.separator, ShotSeparator::DoubleNewline);
        assert!(config.prefix.is_empty());
    }
}
