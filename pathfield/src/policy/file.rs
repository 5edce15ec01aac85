//! File path policy and picker filter descriptor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::platform::Platform;
use crate::policy::PathPolicy;
use crate::storage::StorageHandle;

/// Name filter handed to the external file picker.
///
/// Validation never looks at this; it only rides along so the surrounding
/// UI can forward it to the picker dialog verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Human-readable label for the file type ("Log files").
    pub type_label: String,
    /// Glob patterns, in order ("*.log", "*.txt").
    pub patterns: Vec<String>,
}

impl FileFilter {
    /// Build a filter from a label and a `/`-delimited pattern string,
    /// e.g. `"*.log/*.txt"`. Blank pattern entries are dropped.
    pub fn parse(type_label: impl Into<String>, pattern_string: &str) -> Self {
        let patterns = pattern_string
            .split('/')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            type_label: type_label.into(),
            patterns,
        }
    }
}

/// Policy for fields that hold a file path.
///
/// Shares the directory policy's grammar; only the existence check, the
/// missing-target wording and the picker filter differ.
#[derive(Clone)]
pub struct FilePolicy {
    platform: Platform,
    storage: StorageHandle,
    filter: FileFilter,
}

impl FilePolicy {
    pub fn new(platform: Platform, storage: StorageHandle, filter: FileFilter) -> Self {
        Self {
            platform,
            storage,
            filter,
        }
    }
}

impl PathPolicy for FilePolicy {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn exists(&self, normalized: &str) -> bool {
        self.storage.is_file(normalized)
    }

    fn directory_exists(&self, normalized: &str) -> bool {
        self.storage.is_directory(normalized)
    }

    fn missing_target(&self, normalized: &str) -> ValidationError {
        ValidationError::MissingFile(normalized.to_string())
    }

    fn browse_filter(&self) -> Option<&FileFilter> {
        Some(&self.filter)
    }
}
