//! Message processing: update to quiescence, then interpret effects

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_effect;
use crate::backend::Backend;
use crate::handler;
use crate::history::SharedHistory;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately, before any other message
/// is taken from the channel. Effects are started as they are produced.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
    history: &SharedHistory,
) where
    B: Backend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        tracing::debug!("Processing {:?}", m);
        let result = handler::update(state, m);

        if !result.effect.is_none() {
            handle_effect(result.effect, msg_tx.clone(), backend.clone(), history.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
