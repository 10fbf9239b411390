// File: src/config.rs
// Purpose: Configuration parsing from chapter-forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,

    #[serde(default)]
    pub options: OptionSets,
}

/// Texts shown around the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default)]
    pub intro: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

/// Closed sets offered by the selection inputs
///
/// Membership is enforced when a value is entered; the validator itself
/// only requires these fields to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSets {
    #[serde(default = "default_states")]
    pub states: Vec<String>,

    #[serde(default = "default_roles")]
    pub roles: Vec<String>,

    #[serde(default = "default_study_levels")]
    pub study_levels: Vec<String>,
}

// Default values
fn default_title() -> String {
    "Join".to_string()
}

fn default_tagline() -> String {
    "Launch Your Own Chapter".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_states() -> Vec<String> {
    vec![
        "Delhi".to_string(),
        "Maharashtra".to_string(),
        "Karnataka".to_string(),
    ]
}

fn default_roles() -> Vec<String> {
    vec![
        "President".to_string(),
        "Vice President".to_string(),
        "Director, Marketing".to_string(),
        "Director, Projects".to_string(),
    ]
}

fn default_study_levels() -> Vec<String> {
    vec![
        "Undergraduate-First Year".to_string(),
        "Undergraduate-Second Year".to_string(),
        "Undergraduate-Third Year".to_string(),
        "Undergraduate-Fourth Year".to_string(),
        "Postgraduate-Masters".to_string(),
        "Postgraduate-Doctoral".to_string(),
    ]
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            intro: String::new(),
            submit_label: default_submit_label(),
        }
    }
}

impl Default for OptionSets {
    fn default() -> Self {
        Self {
            states: default_states(),
            roles: default_roles(),
            study_levels: default_study_levels(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./chapter-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("chapter-forms.toml")
    }
}
