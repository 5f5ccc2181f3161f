//! Configuration types for the cleaning run.
//!
//! This module provides configuration options using the builder pattern.
//! The defaults reproduce the tool's fixed-path, single-session behavior;
//! every knob can be overridden from the CLI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input path, resolved against the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data_cleaning_practice_dataset.csv";

/// Default output path; overwritten without confirmation.
pub const DEFAULT_OUTPUT_PATH: &str = "final_cleaned_data.csv";

/// Number of rows shown in the cleaned-data preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Strategy for resolving missing values.
///
/// Absence of a strategy (an unrecognized user token) is a valid "do
/// nothing" outcome and is represented as `Option::<MissingStrategy>::None`
/// at the call sites, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingStrategy {
    /// Remove every row containing at least one missing value.
    Drop,
    /// Fill missing values per column: mean for numeric, mode for categorical.
    Replace,
}

impl MissingStrategy {
    /// Parse a single user-supplied token.
    ///
    /// Case-insensitive, surrounding whitespace ignored. `d` selects
    /// [`MissingStrategy::Drop`], `r` selects [`MissingStrategy::Replace`];
    /// anything else selects no strategy.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "d" => Some(Self::Drop),
            "r" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// Configuration for one cleaning run.
///
/// Use [`CleaningConfig::builder()`] to create a configuration with a
/// fluent API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Path of the CSV file to clean.
    pub input_path: PathBuf,

    /// Path the cleaned CSV is written to, overwriting any existing file.
    pub output_path: PathBuf,

    /// Number of rows shown in the cleaned-data preview.
    /// Default: 5
    pub preview_rows: usize,

    /// Injected missing-value strategy. When `None`, the strategy is read
    /// interactively from stdin (exactly one line, no retry).
    pub strategy: Option<MissingStrategy>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            strategy: None,
        }
    }
}

impl CleaningConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CleaningConfigBuilder {
        CleaningConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidPreviewRows(self.preview_rows));
        }

        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyPath("input_path"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyPath("output_path"));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid preview rows: {0} (must be at least 1)")]
    InvalidPreviewRows(usize),

    #[error("Invalid path for '{0}': must not be empty")]
    EmptyPath(&'static str),
}

/// Builder for [`CleaningConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct CleaningConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    preview_rows: Option<usize>,
    strategy: Option<MissingStrategy>,
}

impl CleaningConfigBuilder {
    /// Set the input CSV path.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the output CSV path.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the number of preview rows.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Inject a missing-value strategy, skipping the interactive prompt.
    pub fn strategy(mut self, strategy: MissingStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `CleaningConfig` or an error if validation fails.
    pub fn build(self) -> Result<CleaningConfig, ConfigValidationError> {
        let config = CleaningConfig {
            input_path: self
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            preview_rows: self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
            strategy: self.strategy,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleaningConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.strategy, None);
    }

    #[test]
    fn test_builder_defaults() {
        let config = CleaningConfig::builder().build().unwrap();
        assert_eq!(config.preview_rows, DEFAULT_PREVIEW_ROWS);
        assert_eq!(config.strategy, None);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = CleaningConfig::builder()
            .input_path("raw.csv")
            .output_path("clean.csv")
            .preview_rows(10)
            .strategy(MissingStrategy::Replace)
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("raw.csv"));
        assert_eq!(config.output_path, PathBuf::from("clean.csv"));
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.strategy, Some(MissingStrategy::Replace));
    }

    #[test]
    fn test_validation_zero_preview_rows() {
        let result = CleaningConfig::builder().preview_rows(0).build();

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidPreviewRows(0)
        ));
    }

    #[test]
    fn test_validation_empty_input_path() {
        let result = CleaningConfig::builder().input_path("").build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyPath("input_path")
        ));
    }

    #[test]
    fn test_strategy_from_token() {
        assert_eq!(MissingStrategy::from_token("d"), Some(MissingStrategy::Drop));
        assert_eq!(
            MissingStrategy::from_token("D"),
            Some(MissingStrategy::Drop)
        );
        assert_eq!(
            MissingStrategy::from_token(" r \n"),
            Some(MissingStrategy::Replace)
        );
        assert_eq!(MissingStrategy::from_token("x"), None);
        assert_eq!(MissingStrategy::from_token(""), None);
        assert_eq!(MissingStrategy::from_token("drop"), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = CleaningConfig::builder()
            .strategy(MissingStrategy::Drop)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CleaningConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.input_path, deserialized.input_path);
        assert_eq!(config.strategy, deserialized.strategy);
    }
}
