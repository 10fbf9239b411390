//! Whole-application validation: acceptance, isolation, boundaries, determinism

mod common;

use chapter_forms::messages;
use chapter_forms::{Application, ContactField, FieldPath, MemberField, RuleKind, Validate};
use common::{valid_application, valid_member, words};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn only_error(draft: &Application) -> (String, &'static str) {
    let errors = draft.validate().expect_err("draft should be invalid");
    let all: Vec<_> = errors.iter().map(|v| (v.path.to_string(), v.message)).collect();
    assert_eq!(all.len(), 1, "expected exactly one error, got {:?}", all);
    all.into_iter().next().unwrap()
}

#[test]
fn fully_valid_application_is_accepted() {
    let draft = valid_application();
    let valid = draft.validate().expect("valid application");

    assert_eq!(valid.university.as_ref(), draft.university.as_str());
    assert_eq!(valid.member_count(), 4);
    assert_eq!(valid.contact.phone.as_ref(), "9123456780");
    assert!(valid.declaration && valid.consent);
}

#[rstest]
#[case::university(|a: &mut Application| a.university.clear(), "university", messages::UNIVERSITY)]
#[case::address(|a: &mut Application| a.address.clear(), "address", messages::ADDRESS)]
#[case::state(|a: &mut Application| a.state.clear(), "state", messages::SELECT_OPTION)]
#[case::pincode(|a: &mut Application| a.pincode.clear(), "pincode", messages::SELECT_OPTION)]
#[case::district(|a: &mut Application| a.district.clear(), "district", messages::SELECT_OPTION)]
#[case::website(|a: &mut Application| a.website = "iitd.ac.in".into(), "website", messages::WEBSITE)]
#[case::contact_name(|a: &mut Application| a.contact.name.clear(), "contact.name", messages::NAME)]
#[case::contact_email(|a: &mut Application| a.contact.email = "asha@".into(), "contact.email", messages::EMAIL)]
#[case::contact_phone(|a: &mut Application| a.contact.phone.clear(), "contact.phone", messages::PHONE_DIGITS)]
#[case::contact_linkedin(|a: &mut Application| a.contact.linkedin.clear(), "contact.linkedin", messages::LINKEDIN)]
#[case::member_role(|a: &mut Application| a.founding_members[2].role.clear(), "foundingMembers[2].role", messages::ROLE)]
#[case::member_name(|a: &mut Application| a.founding_members[0].name.clear(), "foundingMembers[0].name", messages::NAME)]
#[case::member_email(|a: &mut Application| a.founding_members[1].email.clear(), "foundingMembers[1].email", messages::EMAIL)]
#[case::member_phone(|a: &mut Application| a.founding_members[3].phone = "12345".into(), "foundingMembers[3].phone", messages::PHONE_LENGTH)]
#[case::member_linkedin(|a: &mut Application| a.founding_members[0].linkedin.clear(), "foundingMembers[0].linkedin", messages::LINKEDIN)]
#[case::member_discipline(|a: &mut Application| a.founding_members[1].discipline.clear(), "foundingMembers[1].discipline", messages::SELECT_ONE)]
#[case::member_study(|a: &mut Application| a.founding_members[2].study.clear(), "foundingMembers[2].study", messages::SELECT_ONE)]
#[case::resume(|a: &mut Application| a.resume.clear(), "resume", messages::DOCUMENT)]
#[case::proof(|a: &mut Application| a.proof.clear(), "proof", messages::DOCUMENT)]
#[case::chapter_plan(|a: &mut Application| a.chapter_plan.clear(), "chapterPlan", messages::CHAPTER_PLAN)]
#[case::declaration(|a: &mut Application| a.declaration = false, "declaration", messages::NECESSARY)]
#[case::consent(|a: &mut Application| a.consent = false, "consent", messages::NECESSARY)]
fn single_invalid_field_is_reported_in_isolation(
    #[case] break_field: fn(&mut Application),
    #[case] path: &str,
    #[case] message: &str,
) {
    let mut draft = valid_application();
    break_field(&mut draft);

    assert_eq!(only_error(&draft), (path.to_string(), message));
}

#[rstest]
#[case(3, Some(messages::TOO_FEW_MEMBERS))]
#[case(4, None)]
#[case(5, None)]
#[case(6, None)]
#[case(7, Some(messages::TOO_MANY_MEMBERS))]
fn member_count_boundaries(#[case] members: usize, #[case] expected: Option<&str>) {
    let mut draft = valid_application();
    draft.founding_members = (1..=members).map(valid_member).collect();

    match (draft.validate(), expected) {
        (Ok(valid), None) => assert_eq!(valid.member_count(), members),
        (Err(errors), Some(message)) => {
            assert_eq!(errors.len(), 1);
            let violation = errors.get(&FieldPath::FoundingMembers).expect("count error");
            assert_eq!(violation.message, message);
            assert_eq!(violation.kind, RuleKind::CountBound);
        }
        (result, expected) => panic!("unexpected {:?} for {:?}", result.map(|_| ()), expected),
    }
}

#[rstest]
#[case("12345abc67", Some((messages::PHONE_DIGITS, RuleKind::Format)))]
#[case("12345", Some((messages::PHONE_LENGTH, RuleKind::LengthBound)))]
#[case("1234567890", None)]
fn phone_format_then_length(
    #[case] phone: &str,
    #[case] expected: Option<(&str, RuleKind)>,
) {
    let mut draft = valid_application();
    draft.contact.phone = phone.to_string();
    draft.founding_members[1].phone = phone.to_string();

    let found = draft.validate().err().map(|errors| {
        let contact = errors.get(&FieldPath::Contact(ContactField::Phone)).copied();
        let member = errors.get(&FieldPath::Member(1, MemberField::Phone)).copied();
        assert_eq!(errors.len(), 2);
        assert_eq!(contact.map(|v| v.message), member.map(|v| v.message));
        contact.map(|v| (v.message, v.kind))
    });

    assert_eq!(found.flatten(), expected);
}

#[test]
fn chapter_plan_needs_two_hundred_words() {
    let mut draft = valid_application();

    draft.chapter_plan = words(199);
    assert_eq!(only_error(&draft), ("chapterPlan".to_string(), messages::CHAPTER_PLAN));

    draft.chapter_plan = words(200);
    assert!(draft.validate().is_ok());

    // runs of mixed whitespace count as single separators
    draft.chapter_plan = format!("  {}\n\n", words(200).replace(' ', " \t\n "));
    assert!(draft.validate().is_ok());
}

#[test]
fn role_and_study_accept_labels_outside_the_ui_sets() {
    let mut draft = valid_application();
    draft.founding_members[0].role = "Treasurer".to_string();
    draft.founding_members[0].study = "Diploma".to_string();
    assert!(draft.validate().is_ok());
}

#[test]
fn validation_is_deterministic_and_pure() {
    let mut draft = valid_application();
    draft.university.clear();
    draft.founding_members[2].email = "nope".to_string();
    let snapshot = draft.clone();

    let first = draft.validate().unwrap_err();
    let second = draft.validate().unwrap_err();

    assert_eq!(first, second);
    assert_eq!(draft, snapshot);
}

#[test]
fn all_failures_are_reported_together() {
    let errors = Application::new().validate().unwrap_err();
    let paths: Vec<String> = errors.paths().map(|p| p.to_string()).collect();

    assert_eq!(paths.first().map(String::as_str), Some("university"));
    assert_eq!(paths.last().map(String::as_str), Some("consent"));
    assert!(paths.contains(&"foundingMembers[3].linkedin".to_string()));
    assert_eq!(errors.lookup("contact.phone").map(|v| v.message), Some(messages::PHONE_DIGITS));
}

#[test]
fn end_to_end_two_errors() {
    let mut draft = valid_application();
    draft.university = String::new();
    draft.declaration = false;
    draft.consent = true;

    let errors = draft.validate().unwrap_err();
    let found: Vec<(String, &str)> = errors
        .iter()
        .map(|v| (v.path.to_string(), v.message))
        .collect();

    assert_eq!(
        found,
        vec![
            ("university".to_string(), "Please enter a valid university name"),
            ("declaration".to_string(), "This is a necessary selection"),
        ]
    );
}

#[test]
fn normalized_payload_keeps_draft_keys() {
    let valid = valid_application().validate().unwrap();
    let json = serde_json::to_value(&valid).unwrap();

    assert_eq!(json["university"], "Indian Institute of Technology Delhi");
    assert_eq!(json["contact"]["phone"], "9123456780");
    assert_eq!(json["foundingMembers"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["resume"][0]["name"], "resume.pdf");
    assert_eq!(json["proof"][0]["type"], "image/png");
    assert_eq!(json["declaration"], true);
    assert!(json["chapterPlan"].is_string());
}
