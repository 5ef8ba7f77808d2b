use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use recite_lib::calendar::{month_grid, MonthGrid};
use recite_lib::entries;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, month: Option<&str>, format: &OutputFormat) -> Result<()> {
    let today = Local::now().date_naive();

    let (year, month) = match month {
        Some(raw) => parse_month(raw)
            .with_context(|| format!("Invalid month '{}', expected YYYY-MM", raw))?,
        None => (today.year(), today.month()),
    };

    let grid = month_grid(year, month, today, &app.entries)
        .with_context(|| format!("Invalid month '{}-{:02}'", year, month))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        OutputFormat::Plain => {
            render_plain(&grid);
            println!(
                "\n{} sentences across {} study days. '*' marks recorded days.",
                app.entries.len(),
                entries::distinct_day_count(&app.entries)
            );
        }
    }

    Ok(())
}

fn parse_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((year, month))
}

fn render_plain(grid: &MonthGrid) {
    // Header line like "      May 2024"
    let title = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    println!("{:^29}", title);
    println!(" Sun Mon Tue Wed Thu Fri Sat");

    for week in &grid.weeks {
        let mut line = String::new();
        for cell in week {
            if !cell.in_month {
                line.push_str("    ");
                continue;
            }
            let today_mark = if cell.is_today { '>' } else { ' ' };
            let entry_mark = if cell.has_entries { '*' } else { ' ' };
            line.push_str(&format!("{}{:>2}{}", today_mark, cell.day, entry_mark));
        }
        println!("{}", line);
    }
}
