use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use chapter_forms::{render_form, Application, FormConfig, FormController, Outbox, SubmitOutcome};

use super::load_draft;

pub fn execute(
    draft: Option<&Path>,
    validate: bool,
    output: Option<&Path>,
    config: &FormConfig,
) -> Result<()> {
    let draft = match draft {
        Some(path) => load_draft(path)?,
        None => Application::new(),
    };
    let mut form =
        FormController::from_draft(draft, Outbox::new()).with_options(config.options.clone());

    if validate {
        if let SubmitOutcome::Rejected { errors } = form.submit() {
            tracing::info!(errors, "Rendering with validation messages");
        }
    }

    let html = render_form(&form, config).into_string();

    match output {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
