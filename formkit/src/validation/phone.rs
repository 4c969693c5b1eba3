//! Phone number validation and display formatting.
//!
//! Format-shape checks only; no locale-aware parsing. Formatting
//! characters (spaces, dashes, parentheses) never affect the verdict.

/// Check whether a free-text string plausibly represents a phone number.
///
/// Everything except digits and `+` signs is stripped first; the rules
/// then apply to the stripped form, first match wins:
///
/// 1. empty → invalid
/// 2. `+1` prefix → valid iff exactly 12 characters (`+1` plus 10 digits)
/// 3. `1` prefix with 11 characters → valid
/// 4. exactly 10 digits → valid
/// 5. other `+` prefix → valid iff the remainder is 8–15 digits
/// 6. otherwise → valid iff 8–15 digits
pub fn is_valid_phone(raw: &str) -> bool {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.is_empty() {
        return false;
    }

    // North American with country code: +1 plus 10 digits.
    if cleaned.starts_with("+1") {
        return cleaned.len() == 12;
    }

    // North American with bare leading 1.
    if cleaned.starts_with('1') && cleaned.len() == 11 {
        return true;
    }

    // Local 10-digit number.
    if cleaned.len() == 10 && all_digits(&cleaned) {
        return true;
    }

    // International with any other country code.
    if let Some(rest) = cleaned.strip_prefix('+') {
        return (8..=15).contains(&rest.len()) && all_digits(rest);
    }

    (8..=15).contains(&cleaned.len()) && all_digits(&cleaned)
}

/// Format a phone number for display.
///
/// Exactly 10 digits become `(XXX) XXX-XXXX`; 11 digits with a leading 1
/// become `+1 (XXX) XXX-XXXX`. Any other digit count is returned
/// unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_of(raw);

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
    } else {
        raw.to_string()
    }
}

/// Progressively mask an in-progress phone entry as the user types.
///
/// Re-derives the mask from the accumulated digit count: up to three
/// digits pass through bare, then `(XXX) XXX`, then `(XXX) XXX-XXXX`,
/// and `+1 (XXX) XXX-XXXX` at 11 digits with a leading 1. Digit counts
/// outside those patterns leave the input untouched.
pub fn format_phone_partial(raw: &str) -> String {
    let digits = digits_of(raw);

    if digits.len() <= 10 {
        match digits.len() {
            0..=3 => digits,
            4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
            _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        }
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
    } else {
        raw.to_string()
    }
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_plus_is_invalid() {
        assert!(!is_valid_phone("+"));
    }

    #[test]
    fn test_plus_one_needs_ten_digits() {
        assert!(is_valid_phone("+14155552671"));
        assert!(!is_valid_phone("+1415555267"));
        assert!(!is_valid_phone("+141555526712"));
    }

    #[test]
    fn test_partial_mask_progression() {
        assert_eq!(format_phone_partial("415"), "415");
        assert_eq!(format_phone_partial("4155"), "(415) 5");
        assert_eq!(format_phone_partial("4155552"), "(415) 555-2");
        assert_eq!(format_phone_partial("4155552671"), "(415) 555-2671");
        assert_eq!(format_phone_partial("14155552671"), "+1 (415) 555-2671");
    }

    #[test]
    fn test_partial_mask_passes_through_long_input() {
        assert_eq!(format_phone_partial("+4471234567890"), "+4471234567890");
    }
}
