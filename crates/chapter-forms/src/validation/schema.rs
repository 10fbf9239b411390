// File: src/validation/schema.rs
// Purpose: Declarative rule table mapping every field path to its constraint

use chapter_forms_types::MIN_CHAPTER_PLAN_WORDS;
use chapter_forms_validation::{
    has_min_words, is_non_empty, is_valid_email, is_valid_url, validate_count, validate_phone,
    CountError, PhoneError,
};
use serde::Serialize;

use crate::messages;
use crate::model::{FieldInput, MAX_MEMBERS, MIN_MEMBERS};
use crate::path::{ContactField, FieldPath, MemberField};

/// Category of a failed constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Required,
    Format,
    LengthBound,
    CountBound,
    BooleanLiteral,
}

/// Constraint attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty text, with the field's own message
    Required(&'static str),
    Email,
    /// Absolute URL, with the field's own message
    Url(&'static str),
    /// Digits only, then at least 10 of them
    Phone,
    MinWords { min: usize, message: &'static str },
    /// At least one picked file
    Attached,
    /// Checkbox that must be ticked
    Accepted,
    Roster { min: usize, max: usize },
}

/// A rule's verdict on a bad value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub kind: RuleKind,
    pub message: &'static str,
}

impl Failure {
    const fn new(kind: RuleKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

fn ensure(ok: bool, kind: RuleKind, message: &'static str) -> Result<(), Failure> {
    if ok {
        Ok(())
    } else {
        Err(Failure::new(kind, message))
    }
}

/// The schema: which rule applies to which field
pub fn rule_for(path: FieldPath) -> Rule {
    match path {
        FieldPath::University => Rule::Required(messages::UNIVERSITY),
        FieldPath::Address => Rule::Required(messages::ADDRESS),
        FieldPath::State | FieldPath::Pincode | FieldPath::District => {
            Rule::Required(messages::SELECT_OPTION)
        }
        FieldPath::Website => Rule::Url(messages::WEBSITE),

        FieldPath::Contact(ContactField::Name) => Rule::Required(messages::NAME),
        FieldPath::Contact(ContactField::Email) => Rule::Email,
        FieldPath::Contact(ContactField::Phone) => Rule::Phone,
        FieldPath::Contact(ContactField::Linkedin) => Rule::Url(messages::LINKEDIN),

        FieldPath::FoundingMembers => Rule::Roster {
            min: MIN_MEMBERS,
            max: MAX_MEMBERS,
        },
        FieldPath::Member(_, field) => match field {
            MemberField::Role => Rule::Required(messages::ROLE),
            MemberField::Name => Rule::Required(messages::NAME),
            MemberField::Email => Rule::Email,
            MemberField::Phone => Rule::Phone,
            MemberField::Linkedin => Rule::Url(messages::LINKEDIN),
            MemberField::Discipline | MemberField::Study => Rule::Required(messages::SELECT_ONE),
        },

        FieldPath::Resume | FieldPath::Proof => Rule::Attached,
        FieldPath::ChapterPlan => Rule::MinWords {
            min: MIN_CHAPTER_PLAN_WORDS,
            message: messages::CHAPTER_PLAN,
        },
        FieldPath::Declaration | FieldPath::Consent => Rule::Accepted,
    }
}

impl Rule {
    /// Check a value against this rule
    ///
    /// An input of the wrong shape (a checkbox value for a URL field, say)
    /// fails with the rule's first message.
    pub fn check(&self, input: FieldInput<'_>) -> Result<(), Failure> {
        match (*self, input) {
            (Rule::Required(message), FieldInput::Text(value)) => {
                ensure(is_non_empty(value), RuleKind::Required, message)
            }
            (Rule::Email, FieldInput::Text(value)) => {
                ensure(is_valid_email(value), RuleKind::Format, messages::EMAIL)
            }
            (Rule::Url(message), FieldInput::Text(value)) => {
                ensure(is_valid_url(value), RuleKind::Format, message)
            }
            (Rule::Phone, FieldInput::Text(value)) => validate_phone(value).map_err(|e| match e {
                PhoneError::NotDigits => Failure::new(RuleKind::Format, messages::PHONE_DIGITS),
                PhoneError::TooShort => Failure::new(RuleKind::LengthBound, messages::PHONE_LENGTH),
            }),
            (Rule::MinWords { min, message }, FieldInput::Text(value)) => {
                ensure(has_min_words(value, min), RuleKind::LengthBound, message)
            }
            (Rule::Attached, FieldInput::Files(files)) => {
                ensure(!files.is_empty(), RuleKind::Required, messages::DOCUMENT)
            }
            (Rule::Accepted, FieldInput::Flag(checked)) => {
                ensure(checked, RuleKind::BooleanLiteral, messages::NECESSARY)
            }
            (Rule::Roster { min, max }, FieldInput::Count(len)) => {
                validate_count(len, min, max).map_err(|e| match e {
                    CountError::TooFew { .. } => {
                        Failure::new(RuleKind::CountBound, messages::TOO_FEW_MEMBERS)
                    }
                    CountError::TooMany { .. } => {
                        Failure::new(RuleKind::CountBound, messages::TOO_MANY_MEMBERS)
                    }
                })
            }
            (rule, _) => Err(rule.first_failure()),
        }
    }

    /// The failure this rule reports for a missing value
    pub fn first_failure(&self) -> Failure {
        match *self {
            Rule::Required(message) => Failure::new(RuleKind::Required, message),
            Rule::Email => Failure::new(RuleKind::Format, messages::EMAIL),
            Rule::Url(message) => Failure::new(RuleKind::Format, message),
            Rule::Phone => Failure::new(RuleKind::Format, messages::PHONE_DIGITS),
            Rule::MinWords { message, .. } => Failure::new(RuleKind::LengthBound, message),
            Rule::Attached => Failure::new(RuleKind::Required, messages::DOCUMENT),
            Rule::Accepted => Failure::new(RuleKind::BooleanLiteral, messages::NECESSARY),
            Rule::Roster { .. } => Failure::new(RuleKind::CountBound, messages::TOO_FEW_MEMBERS),
        }
    }

    /// HTML `type` of the input that edits a field under this rule
    pub fn input_type(&self) -> &'static str {
        match self {
            Rule::Email => "email",
            Rule::Url(_) => "url",
            Rule::Phone => "tel",
            Rule::Attached => "file",
            Rule::Accepted => "checkbox",
            Rule::Required(_) | Rule::MinWords { .. } | Rule::Roster { .. } => "text",
        }
    }
}
