// File: src/model.rs
// Purpose: Draft application model as typed by the user

use serde::{Deserialize, Serialize};

use crate::path::{ContactField, FieldPath, MemberField};

/// Fewest founding members an application may list
pub const MIN_MEMBERS: usize = 4;

/// Most founding members an application may list
pub const MAX_MEMBERS: usize = 6;

/// A file handed over by the file picker
///
/// Only its presence is checked; content, size and type are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,

    #[serde(default)]
    pub size: u64,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Point of contact for the chapter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

impl ContactInfo {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Linkedin => &self.linkedin,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Linkedin => &mut self.linkedin,
        }
    }
}

/// One founding member of the chapter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub discipline: String,
    pub study: String,
}

impl Member {
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Role => &self.role,
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Phone => &self.phone,
            MemberField::Linkedin => &self.linkedin,
            MemberField::Discipline => &self.discipline,
            MemberField::Study => &self.study,
        }
    }

    pub fn field_mut(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Role => &mut self.role,
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Phone => &mut self.phone,
            MemberField::Linkedin => &mut self.linkedin,
            MemberField::Discipline => &mut self.discipline,
            MemberField::Study => &mut self.study,
        }
    }
}

/// The in-progress, possibly invalid application
///
/// `Default` is the all-empty value with no members; [`Application::new`] is
/// the value a freshly mounted form starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub university: String,
    pub address: String,
    pub state: String,
    pub pincode: String,
    pub district: String,
    pub website: String,
    pub contact: ContactInfo,
    pub founding_members: Vec<Member>,
    pub resume: Vec<FileRef>,
    pub proof: Vec<FileRef>,
    pub chapter_plan: String,
    pub declaration: bool,
    pub consent: bool,
}

/// A field's current value, borrowed for checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput<'a> {
    Text(&'a str),
    Flag(bool),
    Files(&'a [FileRef]),
    Count(usize),
}

/// A new value for a field, as delivered by an input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Files(Vec<FileRef>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

impl From<Vec<FileRef>> for FieldValue {
    fn from(files: Vec<FileRef>) -> Self {
        FieldValue::Files(files)
    }
}

impl Application {
    /// Blank application with the minimum number of empty members
    pub fn new() -> Self {
        Self {
            founding_members: vec![Member::default(); MIN_MEMBERS],
            ..Self::default()
        }
    }

    /// Every field path of this draft, in form order
    pub fn field_paths(&self) -> Vec<FieldPath> {
        FieldPath::all(self.founding_members.len())
    }

    /// Current text of a text field
    ///
    /// `None` for non-text fields and for members past the end of the roster.
    pub fn text(&self, path: FieldPath) -> Option<&str> {
        let text: &str = match path {
            FieldPath::University => &self.university,
            FieldPath::Address => &self.address,
            FieldPath::State => &self.state,
            FieldPath::Pincode => &self.pincode,
            FieldPath::District => &self.district,
            FieldPath::Website => &self.website,
            FieldPath::ChapterPlan => &self.chapter_plan,
            FieldPath::Contact(field) => self.contact.field(field),
            FieldPath::Member(index, field) => self.founding_members.get(index)?.field(field),
            _ => return None,
        };
        Some(text)
    }

    pub fn text_mut(&mut self, path: FieldPath) -> Option<&mut String> {
        let text = match path {
            FieldPath::University => &mut self.university,
            FieldPath::Address => &mut self.address,
            FieldPath::State => &mut self.state,
            FieldPath::Pincode => &mut self.pincode,
            FieldPath::District => &mut self.district,
            FieldPath::Website => &mut self.website,
            FieldPath::ChapterPlan => &mut self.chapter_plan,
            FieldPath::Contact(field) => self.contact.field_mut(field),
            FieldPath::Member(index, field) => {
                self.founding_members.get_mut(index)?.field_mut(field)
            }
            _ => return None,
        };
        Some(text)
    }

    pub fn flag_mut(&mut self, path: FieldPath) -> Option<&mut bool> {
        match path {
            FieldPath::Declaration => Some(&mut self.declaration),
            FieldPath::Consent => Some(&mut self.consent),
            _ => None,
        }
    }

    pub fn files(&self, path: FieldPath) -> Option<&[FileRef]> {
        match path {
            FieldPath::Resume => Some(&self.resume),
            FieldPath::Proof => Some(&self.proof),
            _ => None,
        }
    }

    pub fn files_mut(&mut self, path: FieldPath) -> Option<&mut Vec<FileRef>> {
        match path {
            FieldPath::Resume => Some(&mut self.resume),
            FieldPath::Proof => Some(&mut self.proof),
            _ => None,
        }
    }

    /// Current value of any field, in the shape its rule checks
    pub fn input(&self, path: FieldPath) -> Option<FieldInput<'_>> {
        match path {
            FieldPath::FoundingMembers => Some(FieldInput::Count(self.founding_members.len())),
            FieldPath::Resume | FieldPath::Proof => self.files(path).map(FieldInput::Files),
            FieldPath::Declaration => Some(FieldInput::Flag(self.declaration)),
            FieldPath::Consent => Some(FieldInput::Flag(self.consent)),
            _ => self.text(path).map(FieldInput::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_application_has_four_empty_members() {
        let draft = Application::new();
        assert_eq!(draft.founding_members.len(), MIN_MEMBERS);
        assert!(draft.founding_members.iter().all(|m| *m == Member::default()));
        assert!(!draft.declaration);
    }

    #[test]
    fn test_text_access_by_path() {
        let mut draft = Application::new();
        *draft
            .text_mut(FieldPath::Member(3, MemberField::Discipline))
            .unwrap() = "Psychology".to_string();

        assert_eq!(draft.founding_members[3].discipline, "Psychology");
        assert_eq!(
            draft.text(FieldPath::Member(3, MemberField::Discipline)),
            Some("Psychology")
        );
        assert_eq!(draft.text(FieldPath::Member(4, MemberField::Discipline)), None);
        assert_eq!(draft.text(FieldPath::Consent), None);
    }

    #[test]
    fn test_input_shapes() {
        let draft = Application::new();
        assert_eq!(draft.input(FieldPath::FoundingMembers), Some(FieldInput::Count(4)));
        assert_eq!(draft.input(FieldPath::Consent), Some(FieldInput::Flag(false)));
        assert_eq!(draft.input(FieldPath::Resume), Some(FieldInput::Files(&[])));
        assert_eq!(draft.input(FieldPath::Website), Some(FieldInput::Text("")));
    }

    #[test]
    fn test_camel_case_payload() {
        let draft: Application = serde_json::from_str(
            r#"{
                "university": "IIT Delhi",
                "foundingMembers": [{ "name": "Asha" }],
                "chapterPlan": "plan",
                "resume": [{ "name": "cv.pdf", "size": 1024, "type": "application/pdf" }]
            }"#,
        )
        .unwrap();

        assert_eq!(draft.university, "IIT Delhi");
        assert_eq!(draft.founding_members.len(), 1);
        assert_eq!(draft.founding_members[0].name, "Asha");
        assert_eq!(draft.founding_members[0].role, "");
        assert_eq!(draft.chapter_plan, "plan");
        assert_eq!(
            draft.resume,
            vec![FileRef::new("cv.pdf").with_size(1024).with_media_type("application/pdf")]
        );

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("foundingMembers").is_some());
        assert!(json.get("chapterPlan").is_some());
    }
}
