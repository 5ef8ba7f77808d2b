use std::io::{self, BufRead, Write};

use anyhow::Result;

use recite_lib::entries::{self, Selector};
use recite_lib::study::{StudySession, ToggleOutcome};

use crate::app::App;

pub fn run(app: &App, selector_raw: &str) -> Result<()> {
    let selector = Selector::parse(selector_raw);
    let selection = entries::select(&app.entries, &selector);

    let mut session = match StudySession::new(selection, &mut rand::thread_rng()) {
        Some(session) => session,
        None => {
            println!("No entries to study.");
            return Ok(());
        }
    };

    println!("Sentences come up in random order.");
    println!("[Enter]=next  p=prev  f=flip  b=bookmark  q=quit");

    let stdin = io::stdin();
    let mut flipped = false;

    loop {
        print_card(&session, flipped);
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "" | "n" => {
                if session.advance() {
                    flipped = false;
                } else {
                    println!("Already at the last card.");
                }
            }
            "p" => {
                if session.retreat() {
                    flipped = false;
                } else {
                    println!("Already at the first card.");
                }
            }
            "f" => flipped = !flipped,
            "b" => match session.attempt_toggle(&app.client) {
                ToggleOutcome::Applied { bookmarked: true } => println!("Bookmarked."),
                ToggleOutcome::Applied { bookmarked: false } => println!("Bookmark removed."),
                ToggleOutcome::RolledBack => {
                    println!("Could not save the bookmark; the change was reverted.")
                }
            },
            "q" => break,
            _ => println!("[Enter]=next  p=prev  f=flip  b=bookmark  q=quit"),
        }
    }

    Ok(())
}

fn print_card(session: &StudySession, flipped: bool) {
    let entry = session.current();
    let star = if entry.is_bookmarked() { " ★" } else { "" };

    println!();
    println!("--- {} / {}{} ---", session.position() + 1, session.len(), star);
    if flipped {
        println!("{}", entry.sentence);
        if !entry.reference_url.is_empty() {
            println!("ref: {}", entry.reference_url);
        }
    } else {
        println!("{}", entry.meaning);
        if !entry.hint.is_empty() {
            println!("hint: {}", entry.hint);
        }
    }
}
