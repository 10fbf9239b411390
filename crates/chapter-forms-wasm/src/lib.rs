//! Chapter Forms WASM
//!
//! WebAssembly bindings for the chapter application form.
//! The browser drives the same controller, schema and messages as the server.

use chapter_forms::{
    render_form, Application, FieldErrors, FieldPath, FileRef, FormConfig, FormController,
    Outbox, SubmitOutcome, ValidApplication, Validate,
};
use chapter_forms_validation as core;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Maps become plain objects, not `Map`s
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

fn parse_path(path: &str) -> Result<FieldPath, JsValue> {
    path.parse().map_err(js_error)
}

fn read_draft(draft: JsValue) -> Result<Application, JsValue> {
    serde_wasm_bindgen::from_value(draft)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse draft: {}", e)))
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum SubmitReply<'a> {
    Submitted { application: ValidApplication },
    Invalid { errors: &'a FieldErrors },
}

#[derive(Serialize)]
struct Verdict<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    application: Option<&'a ValidApplication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

/// The application form, held on the Rust side
///
/// # Example (JavaScript)
/// ```javascript
/// const form = new ApplicationForm();
/// form.setText('university', 'IIT Delhi');
/// form.addMember();
/// const reply = form.submit();
/// if (reply.status === 'invalid') showErrors(reply.errors);
/// ```
#[wasm_bindgen]
pub struct ApplicationForm {
    config: FormConfig,
    controller: FormController<Outbox>,
}

impl ApplicationForm {
    fn with_form_config(config: FormConfig) -> Self {
        let controller =
            FormController::with_submitter(Outbox::new()).with_options(config.options.clone());
        Self { config, controller }
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::with_form_config(FormConfig::default())
    }
}

#[wasm_bindgen]
impl ApplicationForm {
    /// Empty form with four member blocks
    #[wasm_bindgen(constructor)]
    pub fn new() -> ApplicationForm {
        Self::default()
    }

    /// Empty form using texts and option sets from a chapter-forms.toml source
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(toml_src: &str) -> Result<ApplicationForm, JsValue> {
        let config: FormConfig = toml::from_str(toml_src)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        Ok(Self::with_form_config(config))
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, path: &str, value: &str) -> Result<(), JsValue> {
        self.controller.set_field(path, value).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setChecked)]
    pub fn set_checked(&mut self, path: &str, checked: bool) -> Result<(), JsValue> {
        self.controller.set_field(path, checked).map_err(js_error)
    }

    /// `files` is an array of `{ name, size?, type? }`
    #[wasm_bindgen(js_name = setFiles)]
    pub fn set_files(&mut self, path: &str, files: JsValue) -> Result<(), JsValue> {
        let files: Vec<FileRef> = serde_wasm_bindgen::from_value(files)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse files: {}", e)))?;
        self.controller.set_field(path, files).map_err(js_error)
    }

    #[wasm_bindgen(js_name = addMember)]
    pub fn add_member(&mut self) -> bool {
        self.controller.add_member()
    }

    #[wasm_bindgen(js_name = removeMember)]
    pub fn remove_member(&mut self, index: usize) -> bool {
        self.controller.remove_member(index)
    }

    #[wasm_bindgen(js_name = memberCount)]
    pub fn member_count(&self) -> usize {
        self.controller.member_count()
    }

    #[wasm_bindgen(js_name = canAddMember)]
    pub fn can_add_member(&self) -> bool {
        self.controller.can_add_member()
    }

    #[wasm_bindgen(js_name = canRemoveMember)]
    pub fn can_remove_member(&self) -> bool {
        self.controller.can_remove_member()
    }

    /// Stable keys of the member blocks, in roster order
    #[wasm_bindgen(js_name = memberKeys)]
    pub fn member_keys(&self) -> Vec<String> {
        self.controller
            .member_keys()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Chosen value of a field, or nothing while it is empty
    #[wasm_bindgen(js_name = displayValue)]
    pub fn display_value(&self, path: &str) -> Option<String> {
        let path: FieldPath = path.parse().ok()?;
        self.controller.display_value(path).map(str::to_string)
    }

    /// Message from the last submit for one field
    #[wasm_bindgen(js_name = errorFor)]
    pub fn error_for(&self, path: &str) -> Option<String> {
        self.controller
            .errors()
            .lookup(path)
            .map(|violation| violation.message.to_string())
    }

    /// All messages from the last submit, keyed by field path
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.controller.errors())
    }

    pub fn draft(&self) -> Result<JsValue, JsValue> {
        to_js(self.controller.draft())
    }

    /// Validate and, if everything passes, hand back the normalized application
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        match self.controller.submit() {
            SubmitOutcome::Submitted => {
                let application = self
                    .controller
                    .submitter_mut()
                    .drain()
                    .pop()
                    .ok_or_else(|| JsValue::from_str("submitted application went missing"))?;
                console::log_2(&"Form submitted:".into(), &to_js(&application)?);
                to_js(&SubmitReply::Submitted { application })
            }
            SubmitOutcome::Rejected { errors } => {
                console::warn_1(&format!("Form has {} invalid field(s)", errors).into());
                to_js(&SubmitReply::Invalid {
                    errors: self.controller.errors(),
                })
            }
        }
    }

    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> String {
        render_form(&self.controller, &self.config).into_string()
    }
}

/// Validate a whole draft without a form instance
///
/// Returns `{ valid: true, application }` or `{ valid: false, errors }`.
#[wasm_bindgen(js_name = validateApplication)]
pub fn validate_application(draft: JsValue) -> Result<JsValue, JsValue> {
    let draft = read_draft(draft)?;
    match draft.validate() {
        Ok(application) => to_js(&Verdict {
            valid: true,
            application: Some(&application),
            errors: None,
        }),
        Err(errors) => to_js(&Verdict {
            valid: false,
            application: None,
            errors: Some(&errors),
        }),
    }
}

/// Message for one field of a draft, or `null` when it passes
///
/// # Example (JavaScript)
/// ```javascript
/// const message = validateField('foundingMembers[0].phone', draft);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(path: &str, draft: JsValue) -> Result<Option<String>, JsValue> {
    let path = parse_path(path)?;
    let draft = read_draft(draft)?;
    Ok(chapter_forms::validate_field(&draft, path)
        .err()
        .map(|violation| violation.message.to_string()))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Quick URL validation
#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url_js(url: &str) -> bool {
    core::is_valid_url(url)
}
