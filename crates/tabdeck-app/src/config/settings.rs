//! Settings parser for .tabdeck/config.toml

use super::types::Settings;
use std::path::Path;
use tabdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const TABDECK_DIR: &str = ".tabdeck";

/// Load settings from `.tabdeck/config.toml` under `project_path`.
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(TABDECK_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.tabdeck/config.toml` with commented defaults if it is missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let tabdeck_dir = project_path.join(TABDECK_DIR);

    if !tabdeck_dir.exists() {
        std::fs::create_dir_all(&tabdeck_dir)
            .map_err(|e| Error::config(format!("Failed to create .tabdeck dir: {}", e)))?;
    }

    let config_path = tabdeck_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# tabdeck configuration

[backend]
base_url = "http://localhost:3000"
request_timeout_ms = 10000

[behavior]
require_login = false   # Start at the login view
start_path = "/"        # Address opened when none is given

[ui]
show_hints = true       # Key hints in the status bar
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
