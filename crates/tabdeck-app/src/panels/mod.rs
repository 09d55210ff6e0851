//! Leaf panels composed inside a tab
//!
//! Each panel owns its `State`, `Action` and a pure `reducer`; none of them
//! produce effects. Weather is display-only and has no reducer.

pub mod animal;
pub mod single_value;
pub mod text;
pub mod weather;

use tabdeck_core::PanelDescriptor;

/// Kind tag used to match a panel action against a panel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Text,
    SingleValue,
    Animal,
    Weather,
}

impl PanelKind {
    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Text => "Text",
            PanelKind::SingleValue => "Value",
            PanelKind::Animal => "Animal",
            PanelKind::Weather => "Weather",
        }
    }
}

/// State of one panel inside a loaded tab
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Text(text::State),
    SingleValue(single_value::State),
    Animal(animal::State),
    Weather(weather::State),
}

impl PanelState {
    /// Initial state for a descriptor, via the owning panel's constructor
    pub fn from_descriptor(descriptor: PanelDescriptor) -> Self {
        match descriptor {
            PanelDescriptor::Text { value } => PanelState::Text(text::initial_state(value)),
            PanelDescriptor::SingleValue { value } => {
                PanelState::SingleValue(single_value::initial_state(value))
            }
            PanelDescriptor::Animal { value } => PanelState::Animal(animal::initial_state(value)),
            PanelDescriptor::Weather { place, is_okay } => {
                PanelState::Weather(weather::initial_state(place, is_okay))
            }
        }
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            PanelState::Text(_) => PanelKind::Text,
            PanelState::SingleValue(_) => PanelKind::SingleValue,
            PanelState::Animal(_) => PanelKind::Animal,
            PanelState::Weather(_) => PanelKind::Weather,
        }
    }

    /// Text panel currently capturing keystrokes
    pub fn is_editing(&self) -> bool {
        matches!(self, PanelState::Text(state) if state.is_edit_mode_enabled)
    }
}
