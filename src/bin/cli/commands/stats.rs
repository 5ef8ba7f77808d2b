use anyhow::Result;

use recite_lib::entries;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let total = app.entries.len();
    let study_days = entries::distinct_day_count(&app.entries);
    let bookmarked = app
        .entries
        .iter()
        .filter(|entry| entry.is_bookmarked())
        .count();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "totalSentences": total,
                "studyDays": study_days,
                "bookmarked": bookmarked,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Total sentences: {}", total);
            println!("Study days:      {}", study_days);
            println!("Bookmarked:      {}", bookmarked);
        }
    }

    Ok(())
}
