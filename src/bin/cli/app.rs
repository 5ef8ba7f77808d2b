use anyhow::{bail, Context, Result};

use recite_lib::config::{self, AppConfig};
use recite_lib::entries::Entry;
use recite_lib::remote::SheetClient;

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub client: SheetClient,
    pub entries: Vec<Entry>,
}

impl App {
    /// Load configuration, connect the sheet client, and pull the entries.
    pub fn new(url_override: Option<&str>) -> Result<Self> {
        let config_path = config::default_config_path()
            .context("Failed to resolve config directory")?;
        let mut config = AppConfig::load(&config_path)
            .context("Failed to load configuration")?;

        if let Some(url) = url_override {
            config.web_app_url = url.to_string();
        }
        if config.web_app_url.is_empty() {
            bail!(
                "No web app URL configured. Run 'recite-cli config set-url <url>' or pass --url."
            );
        }

        let client = SheetClient::new(&config.web_app_url, config.timeout_secs)?;

        let mut app = Self {
            config,
            client,
            entries: Vec::new(),
        };
        app.refresh();
        Ok(app)
    }

    /// Reload the entry collection from the sheet.
    ///
    /// A failed load degrades to an empty collection so every view still
    /// renders; the cause is only logged.
    pub fn refresh(&mut self) {
        match self.client.fetch_entries() {
            Ok(entries) => self.entries = entries,
            Err(err) => {
                log::error!("Failed to load entries from the sheet: {}", err);
                self.entries.clear();
            }
        }
    }
}
