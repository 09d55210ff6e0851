//! Application state (Model in TEA pattern)

use tabdeck_core::{Location, TabListItem};

use crate::app;
use crate::config::Settings;
use crate::panels::PanelState;
use crate::tab;

/// Lifecycle of the running application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which input handler receives key events.
///
/// Derived from state rather than stored, so it can never disagree with
/// what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Logged out: keys go to the login form
    Login,
    /// Address bar open: keys edit the typed href
    AddressBar,
    /// Focused text panel is in edit mode: keys edit its value
    EditText,
    /// Navigation and panel interaction
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form input; never leaves the view layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

/// View-local state that the component tree does not own
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    /// Index into the visible panels of the active tab
    pub focused_panel: usize,
    /// Typed href while the address bar is open
    pub address_bar: Option<String>,
    pub login: LoginForm,
    /// One-shot message shown in the status bar, cleared by the next key
    pub notice: Option<String>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Dashboard component tree
    pub app: app::State,

    pub ui: UiState,

    pub phase: AppPhase,

    /// Location of the current history entry
    pub location: Location,

    pub settings: Settings,
}

impl AppState {
    pub fn new(app: app::State, location: Location, settings: Settings) -> Self {
        Self {
            app,
            ui: UiState::default(),
            phase: AppPhase::Running,
            location,
            settings,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if !self.app.is_logged_in {
            UiMode::Login
        } else if self.ui.address_bar.is_some() {
            UiMode::AddressBar
        } else if self
            .focused_panel()
            .is_some_and(|(_, panel)| panel.is_editing())
        {
            UiMode::EditText
        } else {
            UiMode::Normal
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Href of the current location, as shown in the address line
    pub fn href(&self) -> String {
        self.location.to_native().href()
    }

    pub fn tab_list(&self) -> &[TabListItem] {
        self.app
            .tabs()
            .map(|tabs| tabs.tab_list())
            .unwrap_or_default()
    }

    pub fn active_tab(&self) -> Option<&tab::State> {
        self.app.tabs().and_then(|tabs| tabs.active_tab())
    }

    /// Panels of the active tab that are shown, with their tab index.
    ///
    /// Weather panels are hidden unless the weather flag is on.
    pub fn visible_panels(&self) -> Vec<(usize, &PanelState)> {
        let weather_enabled = self.app.weather_reports_enabled();
        self.active_tab()
            .map(|tab| {
                tab.panels()
                    .iter()
                    .enumerate()
                    .filter(|(_, panel)| {
                        weather_enabled || !matches!(panel, PanelState::Weather(_))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The focused visible panel and its tab index
    pub fn focused_panel(&self) -> Option<(usize, &PanelState)> {
        self.visible_panels().get(self.ui.focused_panel).copied()
    }
}
