//! Tests for phone validation and formatting.

use formkit::{format_phone, format_phone_partial, is_valid_phone};

#[test]
fn test_north_american_shapes() {
    assert!(is_valid_phone("+14155552671"));
    assert!(is_valid_phone("14155552671"));
    assert!(is_valid_phone("4155552671"));
}

#[test]
fn test_international_shapes() {
    assert!(is_valid_phone("+44712345678"));
    assert!(is_valid_phone("+3581234567890"));
    assert!(!is_valid_phone("+4471234")); // 7 digits after +
    assert!(!is_valid_phone("+1415555267")); // +1 must carry exactly 10 digits
}

#[test]
fn test_rejects_short_and_empty() {
    assert!(!is_valid_phone(""));
    assert!(!is_valid_phone("123"));
    assert!(!is_valid_phone("+"));
}

#[test]
fn test_formatting_characters_are_ignored() {
    let bare = "4155552671";
    let decorated = [
        "(415) 555-2671",
        "415.555.2671",
        "415 555 2671",
        "415-555-2671",
        " 4 1 5 5 5 5 2 6 7 1 ",
    ];
    assert!(is_valid_phone(bare));
    for phone in decorated {
        assert!(is_valid_phone(phone), "expected valid: {phone:?}");
    }
    assert_eq!(is_valid_phone("+1 (415) 555-2671"), is_valid_phone("+14155552671"));
}

#[test]
fn test_display_formatting() {
    assert_eq!(format_phone("4155552671"), "(415) 555-2671");
    assert_eq!(format_phone("14155552671"), "+1 (415) 555-2671");
}

#[test]
fn test_display_formatting_passes_through_other_lengths() {
    assert_eq!(format_phone("123"), "123");
    assert_eq!(format_phone("+44712345678"), "+44712345678");
    assert_eq!(format_phone(""), "");
}

#[test]
fn test_partial_mask_matches_full_mask_at_ten_digits() {
    assert_eq!(format_phone_partial("4155552671"), format_phone("4155552671"));
}
