//! Validated value types for chapter application forms
//!
//! Every type here is a `nutype` newtype whose constructor runs the same
//! predicate the form schema uses. A value of one of these types has already
//! passed validation, so the submitted application is built out of them.
//!
//! # Type overview
//!
//! - `RequiredText` - any non-empty string (names, addresses, selections)
//! - `EmailAddress` - syntactically valid email
//! - `PhoneNumber` - ASCII digits only, at least 10 of them
//! - `WebLink` - absolute URL (website, LinkedIn profile)
//! - `ChapterPlan` - free text of at least 200 words
//!
//! ```rust,ignore
//! use chapter_forms_types::PhoneNumber;
//!
//! let ok = PhoneNumber::try_new("9876543210".to_string())?;   // ✓
//! let bad = PhoneNumber::try_new("98765".to_string());         // ✗ too short
//! ```

use chapter_forms_validation::{has_min_words, is_non_empty, is_valid_email, is_valid_phone, is_valid_url};
use nutype::nutype;

/// Minimum number of words in a chapter plan
pub const MIN_CHAPTER_PLAN_WORDS: usize = 200;

/// Non-empty text
///
/// Whitespace-only input is still "non-empty"; nothing is trimmed.
#[nutype(
    validate(predicate = is_non_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RequiredText(String);

/// Syntactically valid email address
#[nutype(
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Contact number: digits only, at least 10 of them
#[nutype(
    validate(predicate = is_valid_phone),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

/// Absolute URL (university website, LinkedIn profile)
#[nutype(
    validate(predicate = is_valid_url),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct WebLink(String);

/// Long-form chapter plan of at least [`MIN_CHAPTER_PLAN_WORDS`] words
#[nutype(
    validate(predicate = |plan: &str| has_min_words(plan, MIN_CHAPTER_PLAN_WORDS)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ChapterPlan(String);

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["mental-health"; n].join(" ")
    }

    #[test]
    fn test_required_text() {
        assert!(RequiredText::try_new("IIT Bombay".to_string()).is_ok());
        assert!(RequiredText::try_new(" ".to_string()).is_ok());
        assert!(RequiredText::try_new(String::new()).is_err());
    }

    #[test]
    fn test_email_address() {
        let email = EmailAddress::try_new("chapter@univ.edu".to_string()).unwrap();
        assert_eq!(email.as_ref(), "chapter@univ.edu");
        assert!(EmailAddress::try_new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_phone_number() {
        assert!(PhoneNumber::try_new("1234567890".to_string()).is_ok());
        assert!(PhoneNumber::try_new("12345".to_string()).is_err());
        assert!(PhoneNumber::try_new("12345abc67".to_string()).is_err());
    }

    #[test]
    fn test_web_link() {
        let link = WebLink::try_new("https://www.linkedin.com/in/someone".to_string()).unwrap();
        assert_eq!(link.to_string(), "https://www.linkedin.com/in/someone");
        assert!(WebLink::try_new("linkedin.com/in/someone".to_string()).is_err());
    }

    #[test]
    fn test_chapter_plan_boundary() {
        assert!(ChapterPlan::try_new(words(199)).is_err());
        assert!(ChapterPlan::try_new(words(200)).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<PhoneNumber, _> = serde_json::from_str("\"9876543210\"");
        assert!(ok.is_ok());

        let bad: Result<PhoneNumber, _> = serde_json::from_str("\"98765\"");
        assert!(bad.is_err());
    }
}
