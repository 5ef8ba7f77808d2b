use anyhow::Result;

use recite_lib::entries::{self, Selector};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, selector_raw: &str, format: &OutputFormat) -> Result<()> {
    let selector = Selector::parse(selector_raw);
    let selection = entries::select(&app.entries, &selector);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&selection)?);
        }
        OutputFormat::Plain => {
            if selection.is_empty() {
                println!("No saved sentences found.");
                return Ok(());
            }

            for entry in &selection {
                let day = entries::normalize(&entry.date).unwrap_or_else(|| "????-??-??".into());
                let star = if entry.is_bookmarked() { "★" } else { " " };
                println!("{} {}  {}", star, day, entry.meaning);
                println!("             \"{}\"", entry.sentence);
                if !entry.hint.is_empty() {
                    println!("             hint: {}", entry.hint);
                }
            }

            println!("\n{} sentences total", selection.len());
        }
    }

    Ok(())
}
