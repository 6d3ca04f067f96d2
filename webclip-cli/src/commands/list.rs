//! List the built-in templates

use anyhow::Result;
use console::{style, Emoji};
use webclip::TemplateRegistry;

static FILE: Emoji<'_, '_> = Emoji("📄 ", "");

/// Print every template with its destination and triggers
pub fn execute() -> Result<()> {
    let registry = TemplateRegistry::builtin()?;

    for record in &registry {
        let destination = format!("{}/{}", record.target_subpath.join("/"), record.filename);
        println!("{FILE}{}", style(&record.name).cyan().bold());
        println!("   {}", style(destination).dim());

        if record.content.triggers.is_empty() {
            println!("   triggers: {}", style("none").dim());
        } else {
            for trigger in &record.content.triggers {
                println!("   trigger:  {}", style(trigger).yellow());
            }
        }
    }

    println!();
    println!("{} templates", registry.len());
    Ok(())
}
