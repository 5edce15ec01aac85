//! Pluggable path policies.
//!
//! A policy bundles the platform-specific capabilities the controller
//! consults: normalization, format validation, existence, and the wording
//! of the missing-target error. The directory and file variants share one
//! path grammar and differ only in what must exist and in the optional
//! picker filter.

mod directory;
mod file;

pub use directory::DirectoryPolicy;
pub use file::{FileFilter, FilePolicy};

use crate::error::{FormatViolation, ValidationError};
use crate::platform::Platform;

/// Capability set consulted by [`PathField`](crate::PathField).
pub trait PathPolicy {
    /// Platform whose grammar rules apply.
    fn platform(&self) -> Platform;

    /// Normalize raw input text. Idempotent.
    fn normalize(&self, raw: &str) -> String {
        crate::normalize::normalize(raw, self.platform())
    }

    /// Check the syntactic legality of normalized text.
    fn validate_format(&self, normalized: &str) -> Result<(), FormatViolation> {
        crate::validate::validate_format(normalized, self.platform())
    }

    /// Whether the normalized path exists as the kind this policy targets.
    fn exists(&self, normalized: &str) -> bool;

    /// Whether the normalized path exists as a directory, independent of the
    /// policy kind. Used to derive a picker starting location.
    fn directory_exists(&self, normalized: &str) -> bool;

    /// The error reported when existence is required and the target is
    /// missing.
    fn missing_target(&self, normalized: &str) -> ValidationError;

    /// Filter descriptor handed to a file picker. `None` for directory
    /// fields. Never consulted by validation.
    fn browse_filter(&self) -> Option<&FileFilter> {
        None
    }
}
