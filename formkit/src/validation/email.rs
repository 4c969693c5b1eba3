//! Email address validation.

use std::sync::OnceLock;

use regex::Regex;

/// Shape check for an email address: `local@domain.tld`, where local and
/// domain contain no whitespace or `@`, and the domain carries a dot
/// followed by a non-empty TLD. Deliberately permissive beyond that.
pub fn is_valid_email(raw: &str) -> bool {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    let re = SHAPE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex is valid")
    });
    re.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addresses_pass() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co.uk"));
    }

    #[test]
    fn test_missing_parts_fail() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com "));
        assert!(!is_valid_email("ada example@domain.com"));
    }
}
