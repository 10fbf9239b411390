// File: src/validation/mod.rs
// Purpose: Whole-application validation and the field-keyed error map

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::model::Application;
use crate::normalized::ValidApplication;
use crate::path::FieldPath;

pub mod schema;

use schema::{rule_for, Failure, RuleKind};

/// Trait for drafts that can be validated into a normalized value
pub trait Validate {
    type Valid;

    /// Validates the whole value
    ///
    /// Returns the normalized value, or every field violation at once.
    fn validate(&self) -> Result<Self::Valid, FieldErrors>;
}

/// One failed field constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    pub path: FieldPath,
    pub kind: RuleKind,
    pub message: &'static str,
}

impl Violation {
    pub fn new(path: FieldPath, failure: Failure) -> Self {
        Self {
            path,
            kind: failure.kind,
            message: failure.message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Field path → violation, in the order fields appear on the form
///
/// Holds at most one violation per path; lookup by path is O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<Violation>,
    index: HashMap<FieldPath, usize>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation; the first one recorded for a path wins
    pub fn insert(&mut self, violation: Violation) {
        if self.index.contains_key(&violation.path) {
            return;
        }
        self.index.insert(violation.path, self.entries.len());
        self.entries.push(violation);
    }

    pub fn get(&self, path: &FieldPath) -> Option<&Violation> {
        self.index.get(path).map(|&i| &self.entries[i])
    }

    /// Message for a field, if it failed
    pub fn message(&self, path: &FieldPath) -> Option<&'static str> {
        self.get(path).map(|v| v.message)
    }

    /// Lookup by path string (`foundingMembers[0].email`)
    pub fn lookup(&self, path: &str) -> Option<&Violation> {
        path.parse().ok().and_then(|path| self.get(&path))
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.entries.iter().map(|v| v.path)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Re-key member errors after the member at `removed` left the roster
    ///
    /// The removed member's errors are dropped and later members shift down
    /// one index.
    pub fn remove_member(&mut self, removed: usize) {
        let entries = std::mem::take(&mut self.entries);
        self.index.clear();

        for mut violation in entries {
            match violation.path {
                FieldPath::Member(i, _) if i == removed => continue,
                FieldPath::Member(i, field) if i > removed => {
                    violation.path = FieldPath::Member(i - 1, field);
                }
                _ => {}
            }
            self.insert(violation);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.entries.len())
    }
}

impl std::error::Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serialized as `{ "path": "message", ... }` in form order
impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for violation in &self.entries {
            map.serialize_entry(&violation.path, violation.message)?;
        }
        map.end()
    }
}

/// Check one field of a draft in isolation
pub fn validate_field(draft: &Application, path: FieldPath) -> Result<(), Violation> {
    let rule = rule_for(path);
    let verdict = match draft.input(path) {
        Some(input) => rule.check(input),
        None => Err(rule.first_failure()),
    };
    verdict.map_err(|failure| Violation::new(path, failure))
}

/// Run every rule against every field of the draft
pub(crate) fn check_all(draft: &Application) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for path in draft.field_paths() {
        if let Err(violation) = validate_field(draft, path) {
            errors.insert(violation);
        }
    }
    errors
}

impl Validate for Application {
    type Valid = ValidApplication;

    fn validate(&self) -> Result<ValidApplication, FieldErrors> {
        let errors = check_all(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        ValidApplication::from_draft(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::path::{ContactField, MemberField};

    fn violation(path: FieldPath, message: &'static str) -> Violation {
        Violation {
            path,
            kind: RuleKind::Required,
            message,
        }
    }

    #[test]
    fn test_first_violation_per_path_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(violation(FieldPath::University, "first"));
        errors.insert(violation(FieldPath::University, "second"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(&FieldPath::University), Some("first"));
    }

    #[test]
    fn test_lookup_by_string() {
        let mut errors = FieldErrors::new();
        errors.insert(violation(FieldPath::Member(2, MemberField::Phone), messages::PHONE_DIGITS));

        assert!(errors.lookup("foundingMembers[2].phone").is_some());
        assert!(errors.lookup("foundingMembers.2.phone").is_some());
        assert!(errors.lookup("foundingMembers[1].phone").is_none());
        assert!(errors.lookup("nonsense").is_none());
    }

    #[test]
    fn test_remove_member_reindexes() {
        let mut errors = FieldErrors::new();
        errors.insert(violation(FieldPath::University, messages::UNIVERSITY));
        errors.insert(violation(FieldPath::Member(0, MemberField::Name), messages::NAME));
        errors.insert(violation(FieldPath::Member(1, MemberField::Name), messages::NAME));
        errors.insert(violation(FieldPath::Member(2, MemberField::Email), messages::EMAIL));

        errors.remove_member(1);

        let paths: Vec<FieldPath> = errors.paths().collect();
        assert_eq!(
            paths,
            vec![
                FieldPath::University,
                FieldPath::Member(0, MemberField::Name),
                FieldPath::Member(1, MemberField::Email),
            ]
        );
        assert!(errors.contains(&FieldPath::Member(1, MemberField::Email)));
        assert!(!errors.contains(&FieldPath::Member(2, MemberField::Email)));
    }

    #[test]
    fn test_serializes_as_path_message_map() {
        let mut errors = FieldErrors::new();
        errors.insert(violation(FieldPath::Contact(ContactField::Email), messages::EMAIL));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "contact.email": "Enter a valid email" }));
    }

    #[test]
    fn test_validate_field_out_of_range_member() {
        let draft = Application::new();
        let err = validate_field(&draft, FieldPath::Member(9, MemberField::Name)).unwrap_err();
        assert_eq!(err.message, messages::NAME);
    }

    #[test]
    fn test_blank_draft_reports_every_field() {
        let draft = Application::new();
        let errors = draft.validate().unwrap_err();
        // every field except the roster size, which starts at the minimum
        assert_eq!(errors.len(), draft.field_paths().len() - 1);
        assert!(!errors.contains(&FieldPath::FoundingMembers));
    }
}
