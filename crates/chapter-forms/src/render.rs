// File: src/render.rs
// Purpose: Renders the form, its current values and its error state as HTML

use maud::{html, Markup};

use crate::config::FormConfig;
use crate::controller::{FormController, MemberKey};
use crate::path::{ContactField, FieldPath, MemberField};
use crate::validation::schema::rule_for;

/// Render the whole application form
///
/// Pure function of the controller state: rendering twice without an edit in
/// between produces identical markup.
pub fn render_form<S>(form: &FormController<S>, config: &FormConfig) -> Markup {
    let view = View { form, config };

    html! {
        form.chapter-application method="post" novalidate {
            header.hero {
                h1 { (config.form.title) }
                p.tagline { (config.form.tagline) }
            }
            @if !config.form.intro.is_empty() {
                p.intro { (config.form.intro) }
            }

            section.university {
                h2 { "University Details" }
                (view.text_input(FieldPath::University, "Name of University*"))
                (view.text_input(FieldPath::Address, "Address*"))
                div.row {
                    (view.select(FieldPath::State, "State*", &config.options.states))
                    (view.text_input(FieldPath::Pincode, "Pincode*"))
                    (view.text_input(FieldPath::District, "District*"))
                }
                (view.text_input(FieldPath::Website, "University Website Link*"))
            }

            section.contact {
                h2 { "Point of Contact" }
                (view.text_input(FieldPath::Contact(ContactField::Name), "Name*"))
                (view.text_input(FieldPath::Contact(ContactField::Email), "E-Mail ID*"))
                div.row {
                    (view.text_input(FieldPath::Contact(ContactField::Phone), "Contact Number*"))
                    (view.text_input(FieldPath::Contact(ContactField::Linkedin), "LinkedIn*"))
                }
            }

            section.founding-members {
                h2 { "Founding Members" }
                p.hint { "Please note you must have at least 4 founding members (max 6)." }
                (view.error(FieldPath::FoundingMembers))
                @for (index, key) in form.member_keys().iter().enumerate() {
                    (view.member(index, key))
                }
                button type="button" name="add-member" disabled[!form.can_add_member()] {
                    "+ Add Member"
                }
            }

            section.documents {
                h2 { "Documents" }
                (view.file_input(FieldPath::Resume, "Resume*"))
                (view.file_input(FieldPath::Proof, "Proof of University Affiliation*"))
            }

            section.plan {
                (view.field(FieldPath::ChapterPlan, html! {
                    textarea name=(FieldPath::ChapterPlan.to_string()) rows="6" placeholder="Chapter Plan*" {
                        (form.draft().chapter_plan)
                    }
                }))
                (view.checkbox(
                    FieldPath::Declaration,
                    form.draft().declaration,
                    "I declare that the information provided is true and accurate to the best of my knowledge.",
                ))
                (view.checkbox(
                    FieldPath::Consent,
                    form.draft().consent,
                    "I consent to having my information processed and shared with the organization's members and/or partners.",
                ))
            }

            button type="submit" { (config.form.submit_label) }
        }
    }
}

struct View<'a, S> {
    form: &'a FormController<S>,
    config: &'a FormConfig,
}

impl<'a, S> View<'a, S> {
    fn invalid(&self, path: FieldPath) -> bool {
        self.form.errors().contains(&path)
    }

    fn value(&self, path: FieldPath) -> &str {
        self.form.draft().text(path).unwrap_or_default()
    }

    /// Inline message for a failed field
    fn error(&self, path: FieldPath) -> Markup {
        html! {
            @if let Some(violation) = self.form.errors().get(&path) {
                p.field-error data-error-for=(path.to_string()) { (violation.message) }
            }
        }
    }

    /// Wrap a control with its error state and message
    fn field(&self, path: FieldPath, control: Markup) -> Markup {
        html! {
            div.field.invalid[self.invalid(path)] data-field=(path.to_string()) {
                (control)
                (self.error(path))
            }
        }
    }

    fn text_input(&self, path: FieldPath, placeholder: &str) -> Markup {
        let invalid = self.invalid(path);
        self.field(path, html! {
            input
                type=(rule_for(path).input_type())
                name=(path.to_string())
                value=(self.value(path))
                placeholder=(placeholder)
                aria-invalid=[invalid.then_some("true")];
        })
    }

    fn select(&self, path: FieldPath, placeholder: &str, options: &[String]) -> Markup {
        let current = self.value(path);
        self.field(path, html! {
            select name=(path.to_string()) {
                option value="" selected[current.is_empty()] { (placeholder) }
                @for option in options {
                    option value=(option) selected[current == option.as_str()] { (option) }
                }
            }
        })
    }

    /// Radio group whose caption echoes the current choice
    fn choice_group(&self, path: FieldPath, caption: String, options: &[String]) -> Markup {
        let current = self.value(path);
        let name = path.to_string();
        self.field(path, html! {
            label.caption { (caption) }
            div.options {
                @for option in options {
                    label {
                        input type="radio" name=(name) value=(option) checked[current == option.as_str()];
                        (option)
                    }
                }
            }
        })
    }

    fn file_input(&self, path: FieldPath, label: &str) -> Markup {
        let picked = self.form.draft().files(path).unwrap_or_default();
        self.field(path, html! {
            label {
                (label)
                input type=(rule_for(path).input_type()) name=(path.to_string());
            }
            @if !picked.is_empty() {
                ul.picked-files {
                    @for file in picked {
                        li { (file.name) }
                    }
                }
            }
        })
    }

    fn checkbox(&self, path: FieldPath, checked: bool, text: &str) -> Markup {
        self.field(path, html! {
            label {
                input type=(rule_for(path).input_type()) name=(path.to_string()) value="true" checked[checked];
                span { (text) }
            }
        })
    }

    fn member(&self, index: usize, key: &MemberKey) -> Markup {
        let at = |field| FieldPath::Member(index, field);
        let options = &self.config.options;

        let role_caption = match self.form.display_value(at(MemberField::Role)) {
            Some(role) => format!("Role: {}", role),
            None => "Select the Role*".to_string(),
        };
        let study_caption = match self.form.display_value(at(MemberField::Study)) {
            Some(level) => format!("Study Level: {}", level),
            None => "Current level of study*".to_string(),
        };

        html! {
            div.member data-member-key=(key.to_string()) {
                h3 { "Member " (index + 1) }
                (self.choice_group(at(MemberField::Role), role_caption, &options.roles))
                (self.text_input(at(MemberField::Name), "Name*"))
                (self.text_input(at(MemberField::Email), "E-Mail ID*"))
                div.row {
                    (self.text_input(at(MemberField::Phone), "Contact Number*"))
                    (self.text_input(at(MemberField::Linkedin), "LinkedIn*"))
                    (self.text_input(at(MemberField::Discipline), "Discipline*"))
                }
                (self.choice_group(at(MemberField::Study), study_caption, &options.study_levels))
                button type="button" name="remove-member" value=(index) disabled[!self.form.can_remove_member()] {
                    "Remove"
                }
            }
        }
    }
}
