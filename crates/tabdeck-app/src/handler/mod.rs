//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: History and address bar handlers
//! - `panels`: Panel focus and panel key translation

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod panels;
pub(crate) mod update;


use tabdeck_core::Location;

use crate::app;
use crate::config::Settings;
use crate::effect::Effect;
use crate::message::Message;
use crate::state::AppState;
use crate::transition::Transition;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Effect for the interpreter to run
    pub effect: Effect<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            effect: Effect::None,
        }
    }

    pub fn effect(effect: Effect<Message>) -> Self {
        Self {
            message: None,
            effect,
        }
    }
}

/// Initial state and effects for the given location
pub fn init(location: &Location, settings: &Settings) -> Transition<AppState, Message> {
    let route = app::route_from_location(location);
    let location = location.clone();
    let settings = settings.clone();

    app::init(route, settings.behavior.require_login).map_both(
        move |app| AppState::new(app, location, settings),
        Message::App,
    )
}
