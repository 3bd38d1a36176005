//! Error types for the Tax Regime Engine.
//!
//! The computation core is total over valid inputs and never returns an
//! error. Everything in this module belongs to the edges: loading regime
//! configuration, validating caller input and producing reports.

use thiserror::Error;

/// The main error type for the Tax Regime Engine.
///
/// # Example
///
/// ```
/// use tax_regime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/old_regime.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/old_regime.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A regime configuration parsed but violates a structural rule.
    #[error("Invalid configuration for the {regime} regime: {message}")]
    InvalidConfig {
        /// The regime whose configuration is invalid.
        regime: String,
        /// A description of the violated rule.
        message: String,
    },

    /// A regime file declared a different regime than the one expected.
    #[error("Regime mismatch in '{path}': expected {expected}, found {found}")]
    RegimeMismatch {
        /// The offending file.
        path: String,
        /// The regime the file was loaded as.
        expected: String,
        /// The regime the file declares.
        found: String,
    },

    /// A caller-supplied input field is outside its accepted range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A taxpayer inputs file could not be read or parsed.
    #[error("Failed to load inputs from '{path}': {message}")]
    InputFileError {
        /// The inputs file.
        path: String,
        /// What went wrong reading it.
        message: String,
    },

    /// Writing command output failed.
    #[error("Failed to write output: {message}")]
    OutputError {
        /// A description of the failure.
        message: String,
    },

    /// Rendering or writing the printable report failed.
    #[error("Report generation failed: {message}")]
    ReportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
