//! Contact number validation functions

/// Minimum number of digits in a contact number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Why a contact number was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    /// Empty, or contains something other than `0-9`
    NotDigits,
    /// Digits only, but fewer than [`MIN_PHONE_DIGITS`]
    TooShort,
}

/// True when the value is one or more ASCII digits
pub fn is_digits_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a contact number
///
/// The format check runs first; a value that fails it never reports the
/// length error.
pub fn validate_phone(value: &str) -> Result<(), PhoneError> {
    if !is_digits_only(value) {
        return Err(PhoneError::NotDigits);
    }

    if value.len() < MIN_PHONE_DIGITS {
        return Err(PhoneError::TooShort);
    }

    Ok(())
}

pub fn is_valid_phone(value: &str) -> bool {
    validate_phone(value).is_ok()
}

/// Input-layer filter: keeps only ASCII digits
///
/// Applied on every change to a phone input so the stored value is always
/// digits-only.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_format_short_circuits() {
        assert_eq!(validate_phone("12345abc67"), Err(PhoneError::NotDigits));
        // too short AND not digits: only the format error is reported
        assert_eq!(validate_phone("12a"), Err(PhoneError::NotDigits));
        assert_eq!(validate_phone(""), Err(PhoneError::NotDigits));
    }

    #[test]
    fn test_phone_length() {
        assert_eq!(validate_phone("12345"), Err(PhoneError::TooShort));
        assert_eq!(validate_phone("123456789"), Err(PhoneError::TooShort));
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("911234567890").is_ok());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Devanagari digits are numeric but not ASCII
        assert!(!is_digits_only("१२३४५६७८९०"));
    }

    #[test]
    fn test_digits_only_filter() {
        assert_eq!(digits_only("+91 98765-43210"), "919876543210");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("0123"), "0123");
    }
}
