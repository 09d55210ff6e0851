//! Configuration types for tabdeck
//!
//! Defines `Settings` (`.tabdeck/config.toml`) and its sections.

use serde::{Deserialize, Serialize};

/// Application settings (.tabdeck/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Dashboard backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL that `/tabs`, `/tab/{id}` and `/feature-flags` are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Start at the login view instead of logged in
    #[serde(default)]
    pub require_login: bool,

    /// Address opened when no location is given on the command line
    #[serde(default = "default_start_path")]
    pub start_path: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            require_login: false,
            start_path: default_start_path(),
        }
    }
}

fn default_start_path() -> String {
    "/".to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show key hints in the status bar
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.backend.base_url, "http://localhost:3000");
        assert_eq!(settings.backend.request_timeout_ms, 10_000);
        assert!(!settings.behavior.require_login);
        assert_eq!(settings.behavior.start_path, "/");
        assert!(settings.ui.show_hints);
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[backend]
request_timeout_ms = 250
"#,
        )
        .unwrap();

        assert_eq!(settings.backend.request_timeout_ms, 250);
        assert_eq!(settings.backend.base_url, "http://localhost:3000");
        assert!(settings.ui.show_hints);
    }
}
