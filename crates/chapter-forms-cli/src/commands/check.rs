use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use chapter_forms::{FormConfig, FormController, Outbox, SubmitOutcome};

use super::load_draft;

pub fn execute(path: &Path, config: &FormConfig) -> Result<()> {
    let draft = load_draft(path)?;
    let mut form =
        FormController::from_draft(draft, Outbox::new()).with_options(config.options.clone());

    println!("{} {}", "Checking".green().bold(), path.display());
    println!();

    match form.submit() {
        SubmitOutcome::Submitted => {
            let application = form.into_submitter().drain().pop();
            println!("  {} Application is valid", "✓".green());
            if let Some(application) = application {
                println!();
                println!("{}", serde_json::to_string_pretty(&application)?);
            }
            Ok(())
        }
        SubmitOutcome::Rejected { errors } => {
            for violation in form.errors() {
                println!("  {} {}: {}", "✗".red(), violation.path.to_string().cyan(), violation.message);
            }
            println!();
            anyhow::bail!("{} field(s) failed validation", errors)
        }
    }
}
