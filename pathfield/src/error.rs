//! Error types for the validation engine.
//!
//! There is exactly one error taxonomy: a commit is rejected either because
//! the normalized text fails the policy's syntax rules, or because existence
//! is required and the target is missing. Rejection is communicated through
//! field state, never through panics.

use thiserror::Error;

use crate::validate::MAX_PATH_CHARS;

/// A specific way normalized path text can fail format validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatViolation {
    /// Empty text where the field's default is non-empty.
    #[error("path must not be empty")]
    Empty,
    /// A character that no supported filesystem accepts in a path.
    #[error("path contains the illegal character {0:?}")]
    IllegalCharacter(char),
    /// Longer than the cross-platform ceiling.
    #[error("path is longer than {MAX_PATH_CHARS} characters")]
    TooLong,
    /// A double separator survived normalization.
    #[error("path contains an empty segment")]
    EmptySegment,
    /// Windows: a colon anywhere but directly after the drive letter.
    #[error("a colon is only allowed after the drive letter")]
    MisplacedColon,
    /// Windows: trailing space or period.
    #[error("path must not end with a space or period")]
    IllegalTerminator,
    /// Windows: a segment stem matches a reserved device name.
    #[error("\"{0}\" is a reserved device name")]
    ReservedName(String),
}

/// Why a commit was rejected. Displayed verbatim as the field's
/// validation message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid path: {0}")]
    InvalidFormat(#[from] FormatViolation),
    #[error("directory not found: {0}")]
    MissingDirectory(String),
    #[error("file not found: {0}")]
    MissingFile(String),
}
