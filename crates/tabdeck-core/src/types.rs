//! Backend wire types
//!
//! Shapes returned by the dashboard backend:
//! - `GET /tabs` → `[TabListItem]`
//! - `GET /tab/{id}` → `[PanelDescriptor]`
//! - `GET /feature-flags` → `FeatureFlags`

use serde::{Deserialize, Serialize};

/// Identifier of a tab, as used in `/tabs/{id}`
pub type TabId = i64;

/// One entry of the tab list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabListItem {
    pub id: TabId,
    pub name: String,
}

/// Feature flags fetched once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default)]
    pub weather_reports: bool,
}

/// Animal shown by the animal panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    Cat,
    Dog,
    Turtle,
}

impl Animal {
    /// Next animal in the fixed cycle cat → dog → turtle → cat
    pub fn next(self) -> Self {
        match self {
            Animal::Cat => Animal::Dog,
            Animal::Dog => Animal::Turtle,
            Animal::Turtle => Animal::Cat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Animal::Cat => "cat",
            Animal::Dog => "dog",
            Animal::Turtle => "turtle",
        }
    }
}

/// Panel description as sent by the backend, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelDescriptor {
    Text {
        value: String,
    },
    SingleValue {
        value: i64,
    },
    Animal {
        value: Animal,
    },
    #[serde(rename_all = "camelCase")]
    Weather {
        place: String,
        is_okay: bool,
    },
}
