//! Theme and style error types

use std::path::PathBuf;

use thiserror::Error;

use crate::variants::{ComponentKind, Variant};

/// Configuration errors: a theme value outside its enumeration, or a theme
/// file that cannot be read or parsed.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A string did not name any value of the enumeration
    #[error("unknown {kind} `{value}`")]
    UnknownValue { kind: &'static str, value: String },

    /// No theme file where one was expected
    #[error("no vigil.toml found in {}", .0.display())]
    NotFound(PathBuf),

    /// Theme file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid TOML or holds unknown values
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme could not be written back out
    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Style resolution errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleError {
    /// The (kind, variant) pair is not in the static variant table
    #[error("{kind} has no `{variant}` variant")]
    InvalidVariant { kind: ComponentKind, variant: Variant },
}

/// Result type for style resolution
pub type Result<T> = std::result::Result<T, StyleError>;
