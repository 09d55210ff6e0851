//! Message types for the application (TEA pattern)

use tabdeck_core::{Location, NativeLocation};

use crate::app;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Ask the history to push `location`
    RequestLocationChange(NativeLocation),
    /// Navigate to an app route (link activation)
    Navigate(app::Route),
    /// The history moved to a new entry
    LocationChanged(Location),
    /// Browser-style back
    HistoryBack,
    /// Browser-style forward
    HistoryForward,
    /// A history command failed
    NavigationFailed(String),

    /// Action for the dashboard component tree
    App(app::Action),

    // ─────────────────────────────────────────────────────────
    // Panel Focus
    // ─────────────────────────────────────────────────────────
    FocusNextPanel,
    FocusPreviousPanel,

    // ─────────────────────────────────────────────────────────
    // Address Bar
    // ─────────────────────────────────────────────────────────
    /// Open the address bar with the current href
    OpenAddressBar,
    AddressBarInput(char),
    AddressBarBackspace,
    /// Parse the typed href and navigate to it
    SubmitAddressBar,
    CancelAddressBar,

    // ─────────────────────────────────────────────────────────
    // Login Form
    // ─────────────────────────────────────────────────────────
    LoginInput(char),
    LoginBackspace,
    /// Switch between the email and password fields
    LoginNextField,
    SubmitLogin,
}
