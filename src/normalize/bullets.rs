//! Per-line bullet canonicalization.

use super::NormalizeOptions;
use std::borrow::Cow;

/// Rewrite a single content line into canonical bullet syntax.
///
/// `* text` becomes `- text`; the numbered-bullet hybrid is handled by
/// [`numbered_bullet_hybrid`] when enabled. Other lines are returned as-is.
pub fn canonicalize_line<'a>(line: &'a str, options: &NormalizeOptions) -> Cow<'a, str> {
    if let Some(rest) = line.strip_prefix("* ") {
        return Cow::Owned(format!("- {}", rest));
    }

    if options.fix_numbered_bullets {
        if let Some(rest) = numbered_bullet_hybrid(line) {
            return Cow::Owned(format!("- {}", rest));
        }
    }

    Cow::Borrowed(line)
}

/// Match the `D. *text` shape some models emit for list items.
///
/// Fixed offsets: one ASCII digit, `.`, a space, `*`. Returns the text after
/// those four characters. Multi-digit numbers do not match, and a bold span
/// such as `1. **Key**` loses only its first asterisk.
pub fn numbered_bullet_hybrid(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.len() >= 4
        && bytes[0].is_ascii_digit()
        && bytes[1] == b'.'
        && bytes[2] == b' '
        && bytes[3] == b'*'
    {
        // All four bytes are ASCII, so index 4 is a char boundary.
        Some(&line[4..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(line: &str) -> String {
        canonicalize_line(line, &NormalizeOptions::default()).into_owned()
    }

    #[test]
    fn test_star_bullet() {
        assert_eq!(canon("* Hello"), "- Hello");
        assert_eq!(canon("*  indented"), "-  indented");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(canon("Plain text"), "Plain text");
        assert_eq!(canon("- already"), "- already");
        assert_eq!(canon("**Bold**"), "**Bold**");
        assert_eq!(canon("*emphasis*"), "*emphasis*");
        assert_eq!(canon("1. Step"), "1. Step");
        assert_eq!(canon(""), "");
        assert!(matches!(
            canonicalize_line("Plain", &NormalizeOptions::default()),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_numbered_bullet_hybrid() {
        assert_eq!(numbered_bullet_hybrid("1. *Marketing"), Some("Marketing"));
        assert_eq!(canon("3. *Vente directe"), "- Vente directe");
        assert_eq!(numbered_bullet_hybrid("1. Marketing"), None);
        assert_eq!(numbered_bullet_hybrid("1.*x"), None);
        assert_eq!(numbered_bullet_hybrid("1. "), None);
        assert_eq!(numbered_bullet_hybrid("é. *x"), None);
    }

    // Fragile heuristic: fixed offsets only, kept for compatibility with
    // previously generated documents.
    #[test]
    fn test_numbered_bullet_hybrid_fragile_cases() {
        // Two-digit numbers are not recognized.
        assert_eq!(numbered_bullet_hybrid("12. *Item"), None);
        // A bold span keeps its trailing delimiter and one leading asterisk.
        assert_eq!(canon("1. **Key** point"), "- *Key** point");
    }

    #[test]
    fn test_numbered_bullet_fix_disabled() {
        let options = NormalizeOptions::new().with_numbered_bullet_fix(false);
        assert_eq!(canonicalize_line("1. *Item", &options), "1. *Item");
        assert_eq!(canonicalize_line("* Item", &options), "- Item");
    }
}
