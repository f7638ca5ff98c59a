//! Library errors
//!
//! Derivation itself never fails. These errors only surface at the parse
//! boundary: turning user-supplied keys and files into typed values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing names, kinds, or configuration files
#[derive(Debug, Error)]
pub enum Error {
    /// No category is registered under the given key
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// No physical-name kind is registered under the given key
    #[error("unknown physical name kind: {0}")]
    UnknownPhysicalKind(String),

    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

/// Result alias for fallible library operations
pub type Result<T> = std::result::Result<T, Error>;
