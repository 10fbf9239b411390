// File: src/controller.rs
// Purpose: Owns the draft, edits it field by field and validates on submit

use serde::Serialize;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use chapter_forms_validation::{digits_only, is_one_of};

use crate::config::OptionSets;
use crate::error::FormError;
use crate::model::{Application, FieldValue, Member, MAX_MEMBERS, MIN_MEMBERS};
use crate::path::{FieldPath, InputKind, MemberField};
use crate::submit::{LogSubmitter, Submitter};
use crate::validation::{FieldErrors, Validate, Violation};

/// Stable identity of a member block
///
/// Generated once when the member is created and never reused, so UI diffing
/// does not depend on the member's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MemberKey(Uuid);

impl MemberKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The application was valid and handed to the submitter
    Submitted,
    /// Validation failed; errors are now stored on the controller
    Rejected { errors: usize },
}

/// Form state for one application session
///
/// Validation only runs on [`FormController::submit`]; editing a field never
/// touches the stored errors.
pub struct FormController<S = LogSubmitter> {
    draft: Application,
    keys: Vec<MemberKey>,
    errors: FieldErrors,
    options: OptionSets,
    submitter: S,
}

impl FormController<LogSubmitter> {
    /// Fresh form with four empty members and the logging submitter
    pub fn new() -> Self {
        Self::with_submitter(LogSubmitter)
    }
}

impl Default for FormController<LogSubmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FormController<S> {
    pub fn with_submitter(submitter: S) -> Self {
        Self::from_draft(Application::new(), submitter)
    }

    /// Adopt an existing draft, e.g. one restored from JSON
    ///
    /// The roster is taken as-is; the size bound is reported on submit.
    pub fn from_draft(draft: Application, submitter: S) -> Self {
        let keys = draft.founding_members.iter().map(|_| MemberKey::new()).collect();
        Self {
            draft,
            keys,
            errors: FieldErrors::new(),
            options: OptionSets::default(),
            submitter,
        }
    }

    /// Replace the option sets used to vet selections
    pub fn with_options(mut self, options: OptionSets) -> Self {
        self.options = options;
        self
    }

    pub fn draft(&self) -> &Application {
        &self.draft
    }

    pub fn options(&self) -> &OptionSets {
        &self.options
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, path: &FieldPath) -> Option<&Violation> {
        self.errors.get(path)
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn submitter_mut(&mut self) -> &mut S {
        &mut self.submitter
    }

    pub fn into_submitter(self) -> S {
        self.submitter
    }

    /// Keys of the current members, in roster order
    pub fn member_keys(&self) -> &[MemberKey] {
        &self.keys
    }

    pub fn member_count(&self) -> usize {
        self.draft.founding_members.len()
    }

    pub fn can_add_member(&self) -> bool {
        self.member_count() < MAX_MEMBERS
    }

    pub fn can_remove_member(&self) -> bool {
        self.member_count() > MIN_MEMBERS
    }

    /// Current non-empty value of a text field
    ///
    /// Used to echo the chosen role or study level next to its options.
    pub fn display_value(&self, path: FieldPath) -> Option<&str> {
        self.draft.text(path).filter(|value| !value.is_empty())
    }
}

impl<S: Submitter> FormController<S> {
    /// Update a field addressed by its path string
    pub fn set_field(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let path: FieldPath = path.parse()?;
        self.set(path, value)
    }

    /// Update a field
    ///
    /// Phone inputs keep only their digits, and selection fields only take
    /// values from the configured option sets (or empty, to clear).
    pub fn set(&mut self, path: FieldPath, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let len = self.member_count();
        if let Some(index) = path.member_index().filter(|&index| index >= len) {
            return Err(FormError::NoSuchMember { index, len });
        }

        match (path.input_kind(), value.into()) {
            (InputKind::Roster, _) => return Err(FormError::RosterNotSettable),
            (InputKind::Text, FieldValue::Text(text)) => {
                let text = self.accept_text(path, text)?;
                if let Some(slot) = self.draft.text_mut(path) {
                    *slot = text;
                }
            }
            (InputKind::Checkbox, FieldValue::Checked(checked)) => {
                if let Some(slot) = self.draft.flag_mut(path) {
                    *slot = checked;
                }
            }
            (InputKind::Files, FieldValue::Files(files)) => {
                if let Some(slot) = self.draft.files_mut(path) {
                    *slot = files;
                }
            }
            (expected, _) => return Err(FormError::WrongInput { path, expected }),
        }

        debug!(field = %path, "Field updated");
        Ok(())
    }

    /// Input-layer filtering for text fields
    fn accept_text(&self, path: FieldPath, text: String) -> Result<String, FormError> {
        if path.is_phone() {
            return Ok(digits_only(&text));
        }

        let options = match path {
            FieldPath::State => &self.options.states,
            FieldPath::Member(_, MemberField::Role) => &self.options.roles,
            FieldPath::Member(_, MemberField::Study) => &self.options.study_levels,
            _ => return Ok(text),
        };

        if text.is_empty() || is_one_of(&text, options) {
            Ok(text)
        } else {
            Err(FormError::NotAnOption { path, value: text })
        }
    }

    /// Append an empty member; refused once the roster is full
    pub fn add_member(&mut self) -> bool {
        if !self.can_add_member() {
            debug!(members = self.member_count(), "Add member refused: roster full");
            return false;
        }

        self.draft.founding_members.push(Member::default());
        self.keys.push(MemberKey::new());
        debug!(members = self.member_count(), "Member added");
        true
    }

    /// Remove the member at `index`; refused at the minimum roster size
    ///
    /// Stored errors of later members move down with them.
    pub fn remove_member(&mut self, index: usize) -> bool {
        if !self.can_remove_member() {
            debug!(members = self.member_count(), "Remove member refused: roster at minimum");
            return false;
        }
        if index >= self.member_count() {
            debug!(index, members = self.member_count(), "Remove member refused: no such member");
            return false;
        }

        self.draft.founding_members.remove(index);
        self.keys.remove(index);
        self.errors.remove_member(index);
        debug!(index, members = self.member_count(), "Member removed");
        true
    }

    /// Validate the draft and hand it over if it passes
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.draft.validate() {
            Ok(application) => {
                self.errors.clear();
                debug!("Validation passed, handing application to submitter");
                self.submitter.submit(application);
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                let count = errors.len();
                debug!(errors = count, "Validation failed, submission suppressed");
                self.errors = errors;
                SubmitOutcome::Rejected { errors: count }
            }
        }
    }
}
