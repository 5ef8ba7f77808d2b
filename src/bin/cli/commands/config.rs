use anyhow::{Context, Result};

use recite_lib::config::{self, AppConfig};

use crate::OutputFormat;

pub fn run_set_url(url: &str) -> Result<()> {
    let path = config::default_config_path().context("Failed to resolve config directory")?;
    let mut config = AppConfig::load(&path).context("Failed to load configuration")?;

    config.web_app_url = url.to_string();
    config.save(&path).context("Failed to save configuration")?;

    println!("Web app URL saved to {}", path.display());
    Ok(())
}

pub fn run_show(format: &OutputFormat) -> Result<()> {
    let path = config::default_config_path().context("Failed to resolve config directory")?;
    let config = AppConfig::load(&path).context("Failed to load configuration")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Plain => {
            let url = if config.web_app_url.is_empty() {
                "(not set)"
            } else {
                &config.web_app_url
            };
            println!("Config file:  {}", path.display());
            println!("Web app URL:  {}", url);
            println!("Timeout:      {}s", config.timeout_secs);
        }
    }

    Ok(())
}
