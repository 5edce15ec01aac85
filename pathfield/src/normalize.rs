//! Idempotent path text normalization.
//!
//! Normalization rewrites raw user input into a canonical separator and
//! whitespace form for one platform. It is purely syntactic: no symlink
//! resolution, no canonicalization against storage.

use crate::platform::Platform;

/// Normalize raw path text for the given platform.
///
/// Whitespace is trimmed first; fully blank input normalizes to the empty
/// string. The result is a fixpoint: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str, platform: Platform) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match platform {
        Platform::Windows => normalize_windows(trimmed),
        Platform::Posix => normalize_posix(trimmed),
    }
}

/// Windows rules: forward slashes become backslashes, separator runs
/// collapse to one, and the tail is cleaned of separators, spaces and
/// periods. A trailing separator survives only at drive-root length
/// (`C:\` stays `C:\`).
fn normalize_windows(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_sep = false;
    for c in text.chars() {
        let c = if c == '/' { '\\' } else { c };
        if c == '\\' {
            if prev_sep {
                continue;
            }
            prev_sep = true;
        } else {
            prev_sep = false;
        }
        out.push(c);
    }
    // Tail cleanup runs to a fixpoint: stripping a separator can expose a
    // trailing period and stripping periods can expose a separator, and the
    // result must normalize to itself.
    loop {
        let before = out.len();
        while out.ends_with(' ') || out.ends_with('.') {
            out.pop();
        }
        if out.ends_with('\\') && out.chars().count() > 3 {
            out.pop();
        }
        if out.len() == before {
            break;
        }
    }
    out
}

/// Posix rules: separator runs collapse to one; a single trailing separator
/// is stripped unless the whole string is the root `/`.
fn normalize_posix(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_sep = false;
    for c in text.chars() {
        if c == '/' {
            if prev_sep {
                continue;
            }
            prev_sep = true;
        } else {
            prev_sep = false;
        }
        out.push(c);
    }
    // Same fixpoint treatment: dropping a trailing separator may expose
    // whitespace that the initial trim would have removed.
    loop {
        let before = out.len();
        while out.ends_with(char::is_whitespace) {
            out.pop();
        }
        if out.len() > 1 && out.ends_with('/') {
            out.pop();
        }
        if out.len() == before {
            break;
        }
    }
    out
}
