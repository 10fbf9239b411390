// File: src/normalized.rs
// Purpose: The validated application handed to the submission collaborator

use chapter_forms_types::{ChapterPlan, EmailAddress, PhoneNumber, RequiredText, WebLink};
use serde::Serialize;

use crate::model::{Application, ContactInfo, FileRef, Member};
use crate::path::{ContactField, FieldPath, MemberField};
use crate::validation::schema::rule_for;
use crate::validation::{FieldErrors, Violation};

/// Point of contact after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidContact {
    pub name: RequiredText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub linkedin: WebLink,
}

/// Founding member after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidMember {
    pub role: RequiredText,
    pub name: RequiredText,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub linkedin: WebLink,
    pub discipline: RequiredText,
    pub study: RequiredText,
}

/// An application that passed every rule
///
/// Only produced by [`crate::Validate::validate`]; serializes with the same
/// keys as the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidApplication {
    pub university: RequiredText,
    pub address: RequiredText,
    pub state: RequiredText,
    pub pincode: RequiredText,
    pub district: RequiredText,
    pub website: WebLink,
    pub contact: ValidContact,
    pub founding_members: Vec<ValidMember>,
    pub resume: Vec<FileRef>,
    pub proof: Vec<FileRef>,
    pub chapter_plan: ChapterPlan,
    pub declaration: bool,
    pub consent: bool,
}

/// Collects constructor failures while the typed values are built
#[derive(Default)]
struct Builder {
    errors: FieldErrors,
}

impl Builder {
    fn take<T, E>(&mut self, path: FieldPath, built: Result<T, E>) -> Option<T> {
        match built {
            Ok(value) => Some(value),
            Err(_) => {
                self.errors
                    .insert(Violation::new(path, rule_for(path).first_failure()));
                None
            }
        }
    }

    fn text(&mut self, path: FieldPath, value: &str) -> Option<RequiredText> {
        self.take(path, RequiredText::try_new(value.to_string()))
    }

    fn files(&mut self, path: FieldPath, files: &[FileRef]) -> Option<Vec<FileRef>> {
        let attached = if files.is_empty() { Err(()) } else { Ok(files.to_vec()) };
        self.take(path, attached)
    }

    fn contact(&mut self, contact: &ContactInfo) -> Option<ValidContact> {
        let path = FieldPath::Contact;
        let name = self.text(path(ContactField::Name), &contact.name);
        let email = self.take(
            path(ContactField::Email),
            EmailAddress::try_new(contact.email.clone()),
        );
        let phone = self.take(
            path(ContactField::Phone),
            PhoneNumber::try_new(contact.phone.clone()),
        );
        let linkedin = self.take(
            path(ContactField::Linkedin),
            WebLink::try_new(contact.linkedin.clone()),
        );

        Some(ValidContact {
            name: name?,
            email: email?,
            phone: phone?,
            linkedin: linkedin?,
        })
    }

    fn member(&mut self, index: usize, member: &Member) -> Option<ValidMember> {
        let path = |field| FieldPath::Member(index, field);
        let role = self.text(path(MemberField::Role), &member.role);
        let name = self.text(path(MemberField::Name), &member.name);
        let email = self.take(
            path(MemberField::Email),
            EmailAddress::try_new(member.email.clone()),
        );
        let phone = self.take(
            path(MemberField::Phone),
            PhoneNumber::try_new(member.phone.clone()),
        );
        let linkedin = self.take(
            path(MemberField::Linkedin),
            WebLink::try_new(member.linkedin.clone()),
        );
        let discipline = self.text(path(MemberField::Discipline), &member.discipline);
        let study = self.text(path(MemberField::Study), &member.study);

        Some(ValidMember {
            role: role?,
            name: name?,
            email: email?,
            phone: phone?,
            linkedin: linkedin?,
            discipline: discipline?,
            study: study?,
        })
    }
}

impl ValidApplication {
    /// Build the typed application from a draft the schema already accepted
    ///
    /// A constructor rejecting a value is reported as that field's violation.
    pub(crate) fn from_draft(draft: &Application) -> Result<Self, FieldErrors> {
        let mut b = Builder::default();

        let university = b.text(FieldPath::University, &draft.university);
        let address = b.text(FieldPath::Address, &draft.address);
        let state = b.text(FieldPath::State, &draft.state);
        let pincode = b.text(FieldPath::Pincode, &draft.pincode);
        let district = b.text(FieldPath::District, &draft.district);
        let website = b.take(FieldPath::Website, WebLink::try_new(draft.website.clone()));
        let contact = b.contact(&draft.contact);
        let members: Vec<Option<ValidMember>> = draft
            .founding_members
            .iter()
            .enumerate()
            .map(|(index, member)| b.member(index, member))
            .collect();
        let resume = b.files(FieldPath::Resume, &draft.resume);
        let proof = b.files(FieldPath::Proof, &draft.proof);
        let chapter_plan = b.take(
            FieldPath::ChapterPlan,
            ChapterPlan::try_new(draft.chapter_plan.clone()),
        );

        let built = (|| {
            Some(ValidApplication {
                university: university?,
                address: address?,
                state: state?,
                pincode: pincode?,
                district: district?,
                website: website?,
                contact: contact?,
                founding_members: members.into_iter().collect::<Option<Vec<_>>>()?,
                resume: resume?,
                proof: proof?,
                chapter_plan: chapter_plan?,
                declaration: draft.declaration,
                consent: draft.consent,
            })
        })();

        match built {
            Some(application) if b.errors.is_empty() => Ok(application),
            _ => Err(b.errors),
        }
    }

    pub fn member_count(&self) -> usize {
        self.founding_members.len()
    }
}
