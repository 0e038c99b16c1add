use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while building a clock configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The defaults table itself is malformed. This is a programmer error
    /// and aborts construction of the clock.
    #[error("default '{field}' is invalid: {reason}")]
    InvalidDefault {
        /// Offending field of the defaults table
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A color string could not be parsed
    #[error("invalid color '{value}': {reason}")]
    InvalidColor {
        /// Text as written in the source
        value: String,
        /// Parse failure details
        reason: String,
    },

    /// A clock list file could not be read
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A clock list document is not valid TOML for this schema
    #[error("failed to parse clock list at '{location}': {details}")]
    TomlParse {
        /// File path, or "built-in" for the bundled list
        location: String,
        /// Parse error details
        details: String,
    },
}

/// Errors raised when creating or registering a clock.
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("clock id must not be empty")]
    EmptyId,

    #[error("a clock with id '{0}' is already registered")]
    DuplicateId(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the live-edit tweak table.
#[derive(Error, Debug, PartialEq)]
pub enum TweakError {
    #[error("clock '{0}' was not created with debug enabled")]
    DebugDisabled(String),

    #[error("unknown tweak field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects a {expected} value")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
    },
}
