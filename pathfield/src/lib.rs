//! Path input validation and normalization engine.
//!
//! Takes raw, user-typed filesystem path text, normalizes it per target
//! platform, validates its syntactic legality and (optionally) its
//! existence on storage, and drives the commit/error state machine a UI
//! layer renders. The engine never touches rendering; a UI binds to the
//! controller's observable fields and forwards input events to it.
//!
//! Layering, bottom to top:
//! - [`normalize`] / [`validate`]: pure path grammar per [`Platform`].
//! - [`policy`]: pluggable directory/file capability bundles over an
//!   injected [`Storage`] existence check.
//! - [`controller`]: the [`PathField`] commit protocol and derived
//!   presentation state.

pub mod controller;
pub mod error;
pub mod normalize;
pub mod platform;
pub mod policy;
pub mod storage;
pub mod validate;

pub use controller::{FieldConfig, FieldSnapshot, PathField};
pub use error::{FormatViolation, ValidationError};
pub use platform::Platform;
pub use policy::{DirectoryPolicy, FileFilter, FilePolicy, PathPolicy};
pub use storage::{FsStorage, MemoryStorage, Storage, StorageHandle};
