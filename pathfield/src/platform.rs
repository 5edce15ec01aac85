//! Platform selection for path grammar rules.

/// Which operating system's path grammar applies to a field.
///
/// The platform is always passed in explicitly when a policy is built, so
/// both rule sets can be exercised in one test run. `host()` is the only
/// place that looks at the actual operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Backslash separators, drive letters, reserved device names.
    Windows,
    /// Forward-slash separators, no further grammar beyond the NUL rule.
    Posix,
}

impl Platform {
    /// The platform of the machine this program is running on.
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The canonical separator character for this platform.
    pub fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Whether `c` acts as a separator in raw input on this platform.
    ///
    /// Windows accepts both slash directions in typed input; normalization
    /// rewrites them to the canonical form.
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Self::Windows => c == '\\' || c == '/',
            Self::Posix => c == '/',
        }
    }
}
