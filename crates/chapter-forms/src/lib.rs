// Chapter Forms - application form schema, validator and controller
// Validates a chapter application as a whole and keeps per-field error state

pub mod config;
pub mod controller;
pub mod error;
pub mod messages;
pub mod model;
pub mod normalized;
pub mod path;
pub mod render;
pub mod submit;
pub mod validation;

// Re-export the draft model and field addressing
pub use model::{Application, ContactInfo, FieldInput, FieldValue, FileRef, Member, MAX_MEMBERS, MIN_MEMBERS};
pub use path::{ContactField, FieldPath, InputKind, MemberField, PathError};

// Re-export validation
pub use validation::schema::{rule_for, Failure, Rule, RuleKind};
pub use validation::{validate_field, FieldErrors, Validate, Violation};
pub use normalized::{ValidApplication, ValidContact, ValidMember};

// Re-export the controller and its collaborators
pub use controller::{FormController, MemberKey, SubmitOutcome};
pub use submit::{LogSubmitter, Outbox, Submitter};
pub use error::FormError;
pub use config::{FormConfig, FormSection, OptionSets};
pub use render::render_form;

// Re-export validated value types
pub use chapter_forms_types as types;
