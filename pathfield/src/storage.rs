//! Storage existence capability.
//!
//! The one place the engine touches storage is the existence gate inside a
//! commit, and it goes through this trait so tests and headless hosts can
//! substitute their own implementation.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Existence checks against storage.
pub trait Storage: Send + Sync {
    /// Whether `path` denotes an existing directory.
    fn is_directory(&self, path: &str) -> bool;

    /// Whether `path` denotes an existing file.
    fn is_file(&self, path: &str) -> bool;
}

/// Shared handle to a storage implementation.
pub type StorageHandle = Arc<dyn Storage>;

/// Real filesystem checks via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn is_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn is_file(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }
}

/// In-memory storage stub: a path exists exactly when it was added.
///
/// Lookups are by literal string, so tests control existence results without
/// touching the filesystem and without platform-dependent comparison rules.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    directories: HashSet<String>,
    files: HashSet<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing directory.
    pub fn add_directory(&mut self, path: impl Into<String>) -> &mut Self {
        self.directories.insert(path.into());
        self
    }

    /// Register an existing file.
    pub fn add_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.files.insert(path.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn is_directory(&self, path: &str) -> bool {
        self.directories.contains(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains(path)
    }
}
