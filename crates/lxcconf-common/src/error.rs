//! Unified error type for the lxcconf workspace.
//!
//! Building, mutating, and rendering a configuration never fail. Errors
//! only come from the optional parsing helpers on the value types and
//! from JSON export.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LxcConfError {
    /// A textual value could not be converted into its typed form.
    #[error("invalid {field} value \"{value}\": expected {expected}")]
    InvalidValue {
        /// Name of the value type being parsed.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Human-readable description of the accepted forms.
        expected: &'static str,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LxcConfError>;
