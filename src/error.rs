//! Domain-specific error types for emoji-selector.
//!
//! Each concern (codepoint decoding, persistence, dataset loading,
//! configuration) gets its own error enum so callers can decide which
//! failures degrade and which abort.

use thiserror::Error;

/// Errors produced while turning a `unified` codepoint string into a glyph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The codepoint string (or one of its segments) was empty.
    #[error("Empty codepoint segment in '{0}'")]
    EmptySegment(String),

    /// A segment was not valid hexadecimal.
    #[error("Invalid hex codepoint '{segment}' in '{unified}'")]
    InvalidHex { unified: String, segment: String },

    /// A segment parsed, but is not a Unicode scalar value.
    #[error("Codepoint U+{codepoint:X} in '{unified}' is not a valid character")]
    InvalidScalar { unified: String, codepoint: u32 },
}

/// Key-value persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage directory could not be determined.
    #[error("Storage directory not found")]
    NoDirFound,

    /// Reading a stored value failed.
    #[error("Failed to read '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a value failed.
    #[error("Failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded as JSON.
    #[error("Malformed stored value for '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors loading an external emoji dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to read the dataset file.
    #[error("Failed to read dataset: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the dataset JSON.
    #[error("Failed to parse dataset: {0}")]
    ParseFailed(#[source] serde_json::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}

/// Errors surfaced by the picker session.
#[derive(Error, Debug)]
pub enum PickerError {
    /// The tapped emoji carries a malformed codepoint string.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The picker was asked to act before it finished indexing.
    #[error("Picker is not ready (state: {0})")]
    NotReady(&'static str),
}
