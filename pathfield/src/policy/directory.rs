//! Directory path policy.

use crate::error::ValidationError;
use crate::platform::Platform;
use crate::policy::PathPolicy;
use crate::storage::StorageHandle;

/// Policy for fields that hold a directory path.
#[derive(Clone)]
pub struct DirectoryPolicy {
    platform: Platform,
    storage: StorageHandle,
}

impl DirectoryPolicy {
    pub fn new(platform: Platform, storage: StorageHandle) -> Self {
        Self { platform, storage }
    }
}

impl PathPolicy for DirectoryPolicy {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn exists(&self, normalized: &str) -> bool {
        self.storage.is_directory(normalized)
    }

    fn directory_exists(&self, normalized: &str) -> bool {
        self.storage.is_directory(normalized)
    }

    fn missing_target(&self, normalized: &str) -> ValidationError {
        ValidationError::MissingDirectory(normalized.to_string())
    }
}
