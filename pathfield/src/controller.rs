//! Path field controller: commit protocol and derived presentation state.
//!
//! A [`PathField`] owns one control's textual state and drives the
//! normalize → validate-format → validate-existence pipeline through its
//! policy. Invalid input never raises an error value to the caller;
//! rejection is communicated purely through the derived error state, so a
//! field never loses keystrokes on an invalid intermediate value. Only a
//! commit (focus loss or Enter) can canonicalize or replace the live text.

use serde::{Deserialize, Serialize};

use crate::error::{FormatViolation, ValidationError};
use crate::policy::{FileFilter, PathPolicy};

/// Configuration supplied when the field is attached to its control.
///
/// `default_path` is the escape hatch: text exactly equal to it always
/// commits, even when it would otherwise fail validation. An empty string
/// means the field has no default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub default_path: String,
    /// Whether the reset-to-default affordance is enabled.
    pub reset_enabled: bool,
    /// When false, commits additionally require the path to exist.
    pub allow_non_existing: bool,
    /// Custom reset tooltip; blank selects the derived wording.
    pub custom_tooltip: String,
    /// Custom watermark; blank selects the generic wording.
    pub custom_watermark: String,
}

/// The observable fields a UI binds to, captured after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub current_text: String,
    pub committed_path: String,
    pub has_error: bool,
    pub validation_message: Option<String>,
    pub resolved_tooltip: String,
    pub resolved_watermark: String,
    pub can_reset_to_default: bool,
}

type Listener = Box<dyn FnMut(&FieldSnapshot)>;

/// Validation controller for one path entry field.
///
/// Single-threaded by design: the UI event dispatch model is assumed to
/// serialize calls, so there is no internal locking.
pub struct PathField {
    policy: Box<dyn PathPolicy>,
    config: FieldConfig,
    current_text: String,
    committed_path: String,
    error: Option<ValidationError>,
    resolved_tooltip: String,
    resolved_watermark: String,
    can_reset_to_default: bool,
    listeners: Vec<Listener>,
}

impl PathField {
    /// Attach a field with the given policy and configuration.
    ///
    /// Both the live text and the committed value start at the default.
    pub fn new(policy: impl PathPolicy + 'static, config: FieldConfig) -> Self {
        let mut field = Self {
            policy: Box::new(policy),
            current_text: config.default_path.clone(),
            committed_path: config.default_path.clone(),
            config,
            error: None,
            resolved_tooltip: String::new(),
            resolved_watermark: String::new(),
            can_reset_to_default: false,
            listeners: Vec::new(),
        };
        field.recompute_derived();
        field
    }

    // =========================================================================
    // Observable state
    // =========================================================================

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// The last value accepted by a commit; the externally observable
    /// value of the control.
    pub fn committed_path(&self) -> &str {
        &self.committed_path
    }

    pub fn default_path(&self) -> &str {
        &self.config.default_path
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Display text for the current error, if any.
    pub fn validation_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// The current error itself, for programmatic matching.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn resolved_tooltip(&self) -> &str {
        &self.resolved_tooltip
    }

    pub fn resolved_watermark(&self) -> &str {
        &self.resolved_watermark
    }

    /// True iff reset is enabled and the committed value differs from the
    /// default.
    pub fn can_reset_to_default(&self) -> bool {
        self.can_reset_to_default
    }

    /// Capture the observable fields as one value.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            current_text: self.current_text.clone(),
            committed_path: self.committed_path.clone(),
            has_error: self.has_error(),
            validation_message: self.validation_message(),
            resolved_tooltip: self.resolved_tooltip.clone(),
            resolved_watermark: self.resolved_watermark.clone(),
            can_reset_to_default: self.can_reset_to_default,
        }
    }

    /// Register a listener invoked with a fresh snapshot after every
    /// mutating operation.
    pub fn subscribe(&mut self, listener: impl FnMut(&FieldSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Record live input text and run the keystroke-tier validation pass:
    /// text equal to the default clears the error, anything else is
    /// normalized and format-checked. Existence is deliberately not checked
    /// here, so typing never causes storage I/O. Never touches the
    /// committed value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.current_text = text.into();
        self.revalidate_live();
        self.notify();
    }

    /// Promote the live text into the committed value.
    ///
    /// Text equal to the default always commits verbatim. Otherwise the
    /// text is normalized, format-checked, and (unless non-existing values
    /// are allowed, or the result is empty) checked for existence. On
    /// acceptance the canonical form is reflected back into the live text;
    /// on rejection nothing but the error state changes.
    pub fn commit(&mut self) -> bool {
        let accepted = self.commit_value();
        self.recompute_derived();
        self.notify();
        accepted
    }

    fn commit_value(&mut self) -> bool {
        if self.current_text == self.config.default_path {
            self.committed_path = self.current_text.clone();
            self.error = None;
            log::debug!("[pathfield] committed default {:?}", self.committed_path);
            return true;
        }
        let normalized = self.policy.normalize(&self.current_text);
        if let Err(violation) = self.check_format(&normalized) {
            log::debug!(
                "[pathfield] rejected {:?}: {}",
                self.current_text,
                violation
            );
            self.error = Some(ValidationError::from(violation));
            return false;
        }
        if !self.config.allow_non_existing
            && !normalized.is_empty()
            && !self.policy.exists(&normalized)
        {
            let error = self.policy.missing_target(&normalized);
            log::debug!("[pathfield] rejected {normalized:?}: {error}");
            self.error = Some(error);
            return false;
        }
        log::debug!("[pathfield] committed {normalized:?}");
        self.committed_path = normalized.clone();
        self.current_text = normalized;
        self.error = None;
        true
    }

    /// Unconditionally restore the default value, bypassing validation.
    /// The default is trusted by construction.
    pub fn reset(&mut self) {
        self.current_text = self.config.default_path.clone();
        self.committed_path = self.config.default_path.clone();
        self.error = None;
        log::debug!("[pathfield] reset to default {:?}", self.committed_path);
        self.recompute_derived();
        self.notify();
    }

    /// Recalculate tooltip, watermark and reset availability. Runs after
    /// every mutation of the default path, reset flag, committed value or
    /// custom texts.
    pub fn recompute_derived(&mut self) {
        self.resolved_tooltip = if !self.config.custom_tooltip.trim().is_empty() {
            self.config.custom_tooltip.clone()
        } else if !self.config.default_path.trim().is_empty() {
            format!("Reset to the default path ({})", self.config.default_path)
        } else {
            "Reset to the default path".to_string()
        };
        self.resolved_watermark = if !self.config.custom_watermark.trim().is_empty() {
            self.config.custom_watermark.clone()
        } else {
            "Enter a path, or leave empty to use the default".to_string()
        };
        self.can_reset_to_default =
            self.config.reset_enabled && self.committed_path != self.config.default_path;
    }

    // =========================================================================
    // Inbound UI events
    // =========================================================================

    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        self.set_text(text);
    }

    pub fn on_focus_lost(&mut self) {
        self.commit();
    }

    pub fn on_enter_key(&mut self) {
        self.commit();
    }

    pub fn on_reset_requested(&mut self) {
        self.reset();
    }

    /// Accept a picker result as if it had been typed: the selected path
    /// runs through the identical commit pipeline. `None` (picker
    /// cancelled) is a no-op.
    pub fn on_browse_completed(&mut self, selected: Option<String>) {
        if let Some(path) = selected {
            self.set_text(path);
            self.commit();
        }
    }

    // =========================================================================
    // Browse collaboration
    // =========================================================================

    /// Starting location for a picker dialog: the committed path, if it is
    /// non-blank and an existing directory.
    pub fn browse_start_location(&self) -> Option<String> {
        let committed = self.committed_path.trim();
        if committed.is_empty() || !self.policy.directory_exists(committed) {
            return None;
        }
        Some(committed.to_string())
    }

    /// The policy's picker filter descriptor, if any.
    pub fn browse_filter(&self) -> Option<&FileFilter> {
        self.policy.browse_filter()
    }

    // =========================================================================
    // Configuration mutators
    // =========================================================================

    pub fn set_default_path(&mut self, default_path: impl Into<String>) {
        self.config.default_path = default_path.into();
        self.revalidate_live();
        self.recompute_derived();
        self.notify();
    }

    pub fn set_reset_enabled(&mut self, enabled: bool) {
        self.config.reset_enabled = enabled;
        self.recompute_derived();
        self.notify();
    }

    pub fn set_allow_non_existing(&mut self, allow: bool) {
        self.config.allow_non_existing = allow;
        self.notify();
    }

    pub fn set_custom_tooltip(&mut self, tooltip: impl Into<String>) {
        self.config.custom_tooltip = tooltip.into();
        self.recompute_derived();
        self.notify();
    }

    pub fn set_custom_watermark(&mut self, watermark: impl Into<String>) {
        self.config.custom_watermark = watermark.into();
        self.recompute_derived();
        self.notify();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Keystroke-tier validation: format only, no storage access.
    fn revalidate_live(&mut self) {
        if self.current_text == self.config.default_path {
            self.error = None;
            return;
        }
        let normalized = self.policy.normalize(&self.current_text);
        self.error = self
            .check_format(&normalized)
            .err()
            .map(ValidationError::from);
    }

    /// Empty text is a format error when it would override a non-empty
    /// default; everything else is the policy's call.
    fn check_format(&self, normalized: &str) -> Result<(), FormatViolation> {
        if normalized.is_empty() {
            if self.config.default_path.is_empty() {
                Ok(())
            } else {
                Err(FormatViolation::Empty)
            }
        } else {
            self.policy.validate_format(normalized)
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::platform::Platform;
    use crate::policy::DirectoryPolicy;
    use crate::storage::MemoryStorage;

    fn field(config: FieldConfig) -> PathField {
        let policy = DirectoryPolicy::new(Platform::Posix, Arc::new(MemoryStorage::new()));
        PathField::new(policy, config)
    }

    #[test]
    fn test_initial_state_is_default() {
        let f = field(FieldConfig {
            default_path: "/var/log".into(),
            ..Default::default()
        });
        assert_eq!(f.current_text(), "/var/log");
        assert_eq!(f.committed_path(), "/var/log");
        assert!(!f.has_error());
        assert!(!f.can_reset_to_default());
    }

    #[test]
    fn test_tooltip_resolution_order() {
        let mut f = field(FieldConfig {
            default_path: "/var/log".into(),
            custom_tooltip: "Put logs here".into(),
            ..Default::default()
        });
        assert_eq!(f.resolved_tooltip(), "Put logs here");

        f.set_custom_tooltip("");
        assert_eq!(f.resolved_tooltip(), "Reset to the default path (/var/log)");

        f.set_default_path("");
        assert_eq!(f.resolved_tooltip(), "Reset to the default path");
    }

    #[test]
    fn test_watermark_resolution() {
        let mut f = field(FieldConfig::default());
        assert_eq!(
            f.resolved_watermark(),
            "Enter a path, or leave empty to use the default"
        );
        f.set_custom_watermark("Pick a folder");
        assert_eq!(f.resolved_watermark(), "Pick a folder");
    }

    #[test]
    fn test_can_reset_tracks_committed_vs_default() {
        let mut f = field(FieldConfig {
            default_path: "/var/log".into(),
            reset_enabled: true,
            allow_non_existing: true,
            ..Default::default()
        });
        assert!(!f.can_reset_to_default());

        f.set_text("/tmp/other");
        assert!(f.commit());
        assert!(f.can_reset_to_default());

        f.reset();
        assert!(!f.can_reset_to_default());

        f.set_text("/tmp/other");
        f.commit();
        f.set_reset_enabled(false);
        assert!(!f.can_reset_to_default());
    }

    #[test]
    fn test_live_validation_is_format_only() {
        let mut storage = MemoryStorage::new();
        storage.add_directory("/data");
        let policy = DirectoryPolicy::new(Platform::Posix, Arc::new(storage));
        let mut f = PathField::new(policy, FieldConfig::default());

        // Well-formed but non-existent: no error while typing...
        f.set_text("/nowhere");
        assert!(!f.has_error());
        // ...but the commit existence gate rejects it.
        assert!(!f.commit());
        assert!(f.has_error());

        // A format problem surfaces immediately on a keystroke.
        f.set_text("/bad|pipe");
        assert!(f.has_error());
        f.set_text("/data");
        assert!(!f.has_error());
    }

    #[test]
    fn test_set_default_clears_error_when_text_matches() {
        let mut f = field(FieldConfig::default());
        f.set_text("/bad|pipe");
        assert!(f.has_error());
        f.set_default_path("/bad|pipe");
        assert!(!f.has_error());
    }

    #[test]
    fn test_subscribers_see_mutations() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut f = field(FieldConfig {
            allow_non_existing: true,
            ..Default::default()
        });
        let seen: Rc<RefCell<Vec<FieldSnapshot>>> = Rc::default();
        let sink = Rc::clone(&seen);
        f.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        f.set_text("/tmp/x");
        f.commit();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].current_text, "/tmp/x");
        assert_eq!(seen[0].committed_path, "");
        assert_eq!(seen[1].committed_path, "/tmp/x");
        assert!(!seen[1].has_error);
    }

    #[test]
    fn test_browse_filter_is_policy_provided() {
        let f = field(FieldConfig::default());
        assert!(f.browse_filter().is_none());
    }
}
