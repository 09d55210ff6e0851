//! Engine - owns the application state and drives the TEA loop
//!
//! The Engine owns the message channel, the navigation history, the
//! backend and the settings. Frontends feed it messages and subscribe to
//! [`EngineEvent`]s to know when to re-render.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use tabdeck_core::{Location, NativeLocation};

use crate::backend::Backend;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::handler;
use crate::history::{BrowserHistory, SharedHistory};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the engine event broadcast
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for tabdeck.
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, history, effect tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    history: SharedHistory,

    backend: Arc<B>,

    /// Bumped after every message that changed the state
    revision: u64,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<B> Engine<B>
where
    B: Backend + Sync + 'static,
{
    /// Create an Engine positioned at `initial`.
    ///
    /// Must be called inside a tokio runtime: the initial effects (tab
    /// list, panels, feature flags) are started immediately.
    pub fn new(settings: Settings, initial: NativeLocation, backend: B) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let mut history = BrowserHistory::new(initial);
        history.listen(msg_tx.clone());
        let location = Location::from_native(history.current());
        let history = history.into_shared();

        info!("Starting at {}", location.to_native().href());
        let (state, effect) = handler::init(&location, &settings).into_parts();

        let backend = Arc::new(backend);
        crate::actions::handle_effect(effect, msg_tx.clone(), backend.clone(), history.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            history,
            backend,
            revision: 0,
            event_tx,
        }
    }

    /// Also listen for SIGINT/SIGTERM and quit on them.
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Subscribe to engine events.
    ///
    /// Slow subscribers see `RecvError::Lagged` and lose older events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let before = self.state.clone();
        let location_changed = matches!(msg, Message::LocationChanged(_));

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.backend,
            &self.history,
        );

        if location_changed {
            self.emit(EngineEvent::LocationChanged {
                location: self.state.location.clone(),
            });
        }

        if self.state != before {
            self.revision += 1;
            self.emit(EngineEvent::StateChanged {
                revision: self.revision,
            });
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current history entry
    pub fn current_location(&self) -> Option<NativeLocation> {
        match self.history.lock() {
            Ok(history) => Some(history.current().clone()),
            Err(_) => {
                warn!("History lock poisoned");
                None
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
    }

    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
