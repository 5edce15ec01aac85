//! Syntactic format validation for normalized path text.
//!
//! Only the common-denominator rules a path entry field needs: universal
//! illegal characters and a length ceiling, plus Windows colon, terminator
//! and reserved-device-name rules. Empty text is accepted here; whether an
//! empty value is allowed at all depends on the field's default and is
//! decided by the controller.

use crate::error::FormatViolation;
use crate::platform::Platform;

/// Conservative cross-platform ceiling on path length, in characters.
pub const MAX_PATH_CHARS: usize = 4096;

/// Characters no supported filesystem accepts anywhere in a path.
const ILLEGAL_CHARS: [char; 7] = ['\0', '<', '>', '"', '|', '?', '*'];

/// Reserved Windows device names checked against each segment stem.
/// COM1–COM9 and LPT1–LPT9 are matched separately.
const RESERVED_NAMES: [&str; 4] = ["CON", "PRN", "AUX", "NUL"];

/// Check the syntactic legality of already-normalized path text.
pub fn validate_format(normalized: &str, platform: Platform) -> Result<(), FormatViolation> {
    if normalized.is_empty() {
        return Ok(());
    }

    let mut length = 0usize;
    for c in normalized.chars() {
        length += 1;
        if c.is_control() || ILLEGAL_CHARS.contains(&c) {
            return Err(FormatViolation::IllegalCharacter(c));
        }
    }
    if length > MAX_PATH_CHARS {
        return Err(FormatViolation::TooLong);
    }
    // Should be impossible after normalization; defensive.
    if normalized.contains("//") || normalized.contains("\\\\") {
        return Err(FormatViolation::EmptySegment);
    }

    match platform {
        Platform::Windows => validate_windows(normalized),
        Platform::Posix => Ok(()),
    }
}

fn validate_windows(normalized: &str) -> Result<(), FormatViolation> {
    let mut colons = 0usize;
    for (i, c) in normalized.chars().enumerate() {
        if c == ':' {
            colons += 1;
            if i != 1 || colons > 1 {
                return Err(FormatViolation::MisplacedColon);
            }
        }
    }
    if normalized.ends_with(' ') || normalized.ends_with('.') {
        return Err(FormatViolation::IllegalTerminator);
    }
    for segment in normalized.split(['\\', '/']) {
        let stem = segment.split('.').next().unwrap_or(segment);
        if is_reserved_name(stem) {
            return Err(FormatViolation::ReservedName(stem.to_string()));
        }
    }
    Ok(())
}

/// Case-insensitive match against CON/PRN/AUX/NUL and COM1–9/LPT1–9.
fn is_reserved_name(stem: &str) -> bool {
    if RESERVED_NAMES.iter().any(|r| stem.eq_ignore_ascii_case(r)) {
        return true;
    }
    let bytes = stem.as_bytes();
    bytes.len() == 4
        && (bytes[..3].eq_ignore_ascii_case(b"COM") || bytes[..3].eq_ignore_ascii_case(b"LPT"))
        && matches!(bytes[3], b'1'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(path: &str, platform: Platform) -> bool {
        validate_format(path, platform).is_ok()
    }

    #[test]
    fn test_empty_is_accepted_here() {
        assert!(valid("", Platform::Windows));
        assert!(valid("", Platform::Posix));
    }

    #[test]
    fn test_illegal_characters() {
        for c in ['<', '>', '"', '|', '?', '*', '\0', '\t', '\x1b'] {
            let path = format!("/tmp/a{c}b");
            assert_eq!(
                validate_format(&path, Platform::Posix),
                Err(FormatViolation::IllegalCharacter(c))
            );
        }
    }

    #[test]
    fn test_length_ceiling() {
        let just_under = format!("/{}", "a".repeat(MAX_PATH_CHARS - 1));
        assert!(valid(&just_under, Platform::Posix));
        let too_long = format!("/{}", "a".repeat(MAX_PATH_CHARS));
        assert_eq!(
            validate_format(&too_long, Platform::Posix),
            Err(FormatViolation::TooLong)
        );
    }

    #[test]
    fn test_surviving_double_separators_rejected() {
        assert_eq!(
            validate_format("/usr//bin", Platform::Posix),
            Err(FormatViolation::EmptySegment)
        );
        assert_eq!(
            validate_format("C:\\\\temp", Platform::Windows),
            Err(FormatViolation::EmptySegment)
        );
    }

    #[test]
    fn test_windows_colon_rules() {
        assert!(valid("C:\\temp", Platform::Windows));
        assert!(valid("relative\\path", Platform::Windows));
        assert_eq!(
            validate_format("C:\\a:b", Platform::Windows),
            Err(FormatViolation::MisplacedColon)
        );
        assert_eq!(
            validate_format("CD:\\temp", Platform::Windows),
            Err(FormatViolation::MisplacedColon)
        );
        // Colons are unconstrained on posix.
        assert!(valid("/tmp/a:b", Platform::Posix));
    }

    #[test]
    fn test_windows_terminator_rules() {
        assert_eq!(
            validate_format("C:\\temp.", Platform::Windows),
            Err(FormatViolation::IllegalTerminator)
        );
        assert_eq!(
            validate_format("C:\\temp ", Platform::Windows),
            Err(FormatViolation::IllegalTerminator)
        );
        // Posix allows both.
        assert!(valid("/tmp/temp.", Platform::Posix));
    }

    #[test]
    fn test_reserved_device_names() {
        assert!(!valid("C:\\CON\\file.txt", Platform::Windows));
        assert!(!valid("C:\\temp\\con", Platform::Windows));
        assert!(!valid("C:\\temp\\NUL.log", Platform::Windows));
        assert!(!valid("C:\\temp\\Com1", Platform::Windows));
        assert!(!valid("C:\\temp\\lpt9.txt", Platform::Windows));
        assert!(valid("C:\\console\\file.txt", Platform::Windows));
        assert!(valid("C:\\temp\\COM0", Platform::Windows));
        assert!(valid("C:\\temp\\COM10", Platform::Windows));
        assert!(valid("C:\\CONS", Platform::Windows));
        // Reserved names only apply to windows grammar.
        assert!(valid("/dev/con", Platform::Posix));
    }

    #[test]
    fn test_stem_is_text_before_first_period() {
        // "CON.tar.gz" has stem "CON".
        assert!(!valid("C:\\CON.tar.gz", Platform::Windows));
        // "y.CON" has stem "y"; the reserved name sits in the extension.
        assert!(valid("C:\\x\\y.CON", Platform::Windows));
    }
}
