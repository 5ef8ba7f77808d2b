use anyhow::{Context, Result};
use chrono::Local;

use recite_lib::entries::Entry;

use crate::app::App;

pub fn run(
    app: &App,
    sentence: &str,
    meaning: &str,
    date: Option<&str>,
    hint: Option<&str>,
    reference_url: Option<&str>,
) -> Result<()> {
    // The add form pre-fills today when no date is given
    let date = date
        .map(str::to_string)
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    let mut entry = Entry::new(date, sentence.to_string(), meaning.to_string());
    if let Some(hint) = hint {
        entry.hint = hint.to_string();
    }
    if let Some(url) = reference_url {
        entry.reference_url = url.to_string();
    }

    app.client
        .add_entry(&entry)
        .context("Failed to save entry. Make sure your web app URL is correct.")?;

    println!("Saved \"{}\" under {}.", entry.sentence, entry.date);
    Ok(())
}
