//! tabdeck-app - Dashboard components and orchestration for tabdeck
//!
//! This crate implements the dashboard as a tree of TEA components
//! (App → Tabs → Tab → panels) whose reducers return a next state plus an
//! [`Effect`] value, and the Engine that owns the state, interprets the
//! effects and feeds their results back in.
//!
//! ## Composition
//! - [`effect`] / [`transition`] - effect values and the helpers parents use
//!   to lift a child's state and actions into their own
//! - [`panels`], [`tab`], [`tabs`], [`app`] - the component tree
//!
//! ## Driver
//! - [`handler`] - root update function and key handling
//! - [`engine`] - message loop, history and effect interpretation

pub mod actions;
pub mod app;
pub mod backend;
pub mod config;
pub mod effect;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod message;
pub mod panels;
pub mod process;
pub mod signals;
pub mod state;
pub mod tab;
pub mod tabs;
pub mod transition;

// Re-export primary types
pub use backend::{Backend, HttpBackend, LocalBackend, MemoryBackend};
pub use effect::{Command, Effect, Run};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
pub use transition::{flatten, Transition};
