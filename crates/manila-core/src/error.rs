//! Error types for manila-core

use std::path::PathBuf;

/// Result type for manila-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading inputs or compiling a feature area
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter name the feature area does not declare
    #[error("Unknown parameter '{name}' for area '{area}'")]
    UnknownParameter { area: String, name: String },

    /// A parameter value of the wrong kind
    #[error("Parameter '{name}' for area '{area}' expects {expected}, got {found}")]
    WrongKind {
        area: String,
        name: String,
        expected: String,
        found: String,
    },

    /// A feature area name that is not built in
    #[error("Unknown feature area: {name}")]
    UnknownArea { name: String },

    /// A platform family that cannot be parsed
    #[error("Invalid platform family: '{value}'")]
    InvalidPlatform { value: String },

    /// A `key=value` override that cannot be parsed
    #[error("Invalid override '{input}': {reason}")]
    InvalidOverride { input: String, reason: String },

    /// Manifest file not found at the given path
    #[error("Manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
