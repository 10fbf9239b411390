use anyhow::Result;

use chapter_forms::Application;

pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Application::new())?);
    Ok(())
}
