//! tabdeck - A tab-based terminal dashboard
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use tabdeck_app::config::{self, Settings};
use tabdeck_core::prelude::*;
use tabdeck_core::NativeLocation;

/// tabdeck - A tab-based terminal dashboard
#[derive(Parser, Debug)]
#[command(name = "tabdeck")]
#[command(about = "A tab-based terminal dashboard", long_about = None)]
struct Args {
    /// Address to open, e.g. `/tabs/2` (defaults to `behavior.start_path`)
    #[arg(value_name = "LOCATION")]
    location: Option<String>,

    /// Backend base URL (overrides `backend.base_url`)
    #[arg(long, value_name = "URL")]
    backend: Option<String>,

    /// Start at the login form
    #[arg(long)]
    require_login: bool,

    /// Directory holding `.tabdeck/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default `.tabdeck/config.toml` if there is none
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.backend {
            settings.backend.base_url = url.clone();
        }
        if self.require_login {
            settings.behavior.require_login = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file, since the TUI owns stdout
    tabdeck_core::logging::init()?;

    let config_dir = args
        .config_dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        config::init_config_dir(&config_dir).context("Writing default config")?;
    }

    let mut settings = config::load_settings(&config_dir);
    args.apply(&mut settings);

    let href = args
        .location
        .clone()
        .unwrap_or_else(|| settings.behavior.start_path.clone());
    let initial = NativeLocation::parse_href(&href).context("Parsing start location")?;
    info!("Opening {} against {}", initial.href(), settings.backend.base_url);

    let result = tabdeck_tui::run(settings, initial).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("tabdeck exiting");
    result
}
