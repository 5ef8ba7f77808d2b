mod app;
mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recite-cli", about = "English-sentence flashcard and calendar review CLI", version)]
struct Cli {
    /// Override the configured web app URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show a month calendar with recorded-entry markers
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        month: Option<String>,
    },

    /// List sentences for a selector
    List {
        /// "all", "bookmarked", or a YYYY-MM-DD day
        selector: String,
    },

    /// Record a new sentence
    Add {
        /// The English sentence
        sentence: String,
        /// Its meaning in your native language
        meaning: String,
        /// Day to record it under (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Optional hint shown on the card front
        #[arg(long)]
        hint: Option<String>,
        /// Optional reference URL
        #[arg(long = "ref")]
        reference_url: Option<String>,
    },

    /// Study sentences as shuffled flashcards
    Study {
        /// "all", "bookmarked", or a YYYY-MM-DD day
        selector: String,
    },

    /// Show collection statistics
    Stats,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Set the spreadsheet web app URL
    SetUrl { url: String },
    /// Print the current configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Calendar { month } => {
            let app = app::App::new(cli.url.as_deref())?;
            commands::calendar::run(&app, month.as_deref(), &cli.format)?;
        }
        Command::List { selector } => {
            let app = app::App::new(cli.url.as_deref())?;
            commands::list::run(&app, &selector, &cli.format)?;
        }
        Command::Add { sentence, meaning, date, hint, reference_url } => {
            let app = app::App::new(cli.url.as_deref())?;
            commands::add::run(
                &app,
                &sentence,
                &meaning,
                date.as_deref(),
                hint.as_deref(),
                reference_url.as_deref(),
            )?;
        }
        Command::Study { selector } => {
            let app = app::App::new(cli.url.as_deref())?;
            commands::study::run(&app, &selector)?;
        }
        Command::Stats => {
            let app = app::App::new(cli.url.as_deref())?;
            commands::stats::run(&app, &cli.format)?;
        }
        Command::Config(subcmd) => match subcmd {
            ConfigCommand::SetUrl { url } => commands::config::run_set_url(&url)?,
            ConfigCommand::Show => commands::config::run_show(&cli.format)?,
        },
    }

    Ok(())
}
