//! As-you-type formatting for Korean mobile numbers.

/// Maximum number of digits kept from the input.
pub const MAX_DIGITS: usize = 11;

/// Reformat raw input into `XXX-XXXX-XXXX`.
///
/// Non-digits are dropped, at most [`MAX_DIGITS`] digits are kept, and a hyphen
/// is only inserted once the next group has started, so partial input stays
/// editable (`"010123"` becomes `"010-123"`).
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    // All ASCII from here on, so byte offsets are char offsets.
    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_number() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
    }

    #[test]
    fn test_partial_numbers() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("01"), "01");
        assert_eq!(format_phone("010"), "010");
        assert_eq!(format_phone("0101"), "010-1");
        assert_eq!(format_phone("010123"), "010-123");
        assert_eq!(format_phone("0101234"), "010-1234");
        assert_eq!(format_phone("01012345"), "010-1234-5");
    }

    #[test]
    fn test_non_digits_are_dropped_then_regrouped() {
        assert_eq!(format_phone("010-12a34"), "010-1234");
        assert_eq!(format_phone("010 1234 5678"), "010-1234-5678");
        assert_eq!(format_phone("(010)1234.5678"), "010-1234-5678");
    }

    #[test]
    fn test_caps_at_eleven_digits() {
        assert_eq!(format_phone("010123456789999"), "010-1234-5678");
    }

    #[test]
    fn test_reformatting_is_stable() {
        let once = format_phone("01012345678");
        assert_eq!(format_phone(&once), once);
    }
}
