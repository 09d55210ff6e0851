//! In-memory navigation history
//!
//! Stands in for the browser history: a stack of entries with a cursor.
//! Every push or traversal notifies the listener with a
//! `Message::LocationChanged` built through the location codec. The move is
//! only committed once the listener has accepted the notification.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use tabdeck_core::prelude::*;
use tabdeck_core::{Location, NativeLocation};

use crate::message::Message;

/// History shared between the engine and the effect interpreter
pub type SharedHistory = Arc<Mutex<BrowserHistory>>;

#[derive(Debug)]
pub struct BrowserHistory {
    entries: Vec<NativeLocation>,
    index: usize,
    next_key: u64,
    listener: Option<mpsc::Sender<Message>>,
}

impl BrowserHistory {
    /// History with a single entry; the listener is not told about it.
    pub fn new(initial: NativeLocation) -> Self {
        let mut history = Self {
            entries: Vec::new(),
            index: 0,
            next_key: 0,
            listener: None,
        };
        let entry = history.keyed(initial);
        history.entries.push(entry);
        history
    }

    pub fn into_shared(self) -> SharedHistory {
        Arc::new(Mutex::new(self))
    }

    pub fn listen(&mut self, listener: mpsc::Sender<Message>) {
        self.listener = Some(listener);
    }

    pub fn current(&self) -> &NativeLocation {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Push `location` after the current entry, dropping forward entries.
    pub fn push(&mut self, location: NativeLocation) -> Result<()> {
        let entry = self.keyed(location);
        debug!("History push {}", entry.href());
        self.notify(&entry)?;

        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
        Ok(())
    }

    /// Move back one entry. Returns `false` at the start of the history.
    pub fn back(&mut self) -> Result<bool> {
        if !self.can_go_back() {
            return Ok(false);
        }
        self.go_to(self.index - 1)?;
        Ok(true)
    }

    /// Move forward one entry. Returns `false` at the end of the history.
    pub fn forward(&mut self) -> Result<bool> {
        if !self.can_go_forward() {
            return Ok(false);
        }
        self.go_to(self.index + 1)?;
        Ok(true)
    }

    fn go_to(&mut self, index: usize) -> Result<()> {
        self.notify(&self.entries[index])?;
        self.index = index;
        Ok(())
    }

    fn keyed(&mut self, mut location: NativeLocation) -> NativeLocation {
        self.next_key += 1;
        location.key = Some(format!("{:06x}", self.next_key));
        location
    }

    fn notify(&self, entry: &NativeLocation) -> Result<()> {
        let Some(listener) = &self.listener else {
            return Ok(());
        };

        let location = Location::from_native(entry);
        listener
            .try_send(Message::LocationChanged(location))
            .map_err(|e| match e {
                mpsc::error::TrySendError::Closed(_) => Error::ChannelClosed,
                mpsc::error::TrySendError::Full(_) => {
                    Error::channel_send("location change: channel full")
                }
            })
    }
}
