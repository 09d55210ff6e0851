//! Effect interpreter: runs effect commands and re-dispatches their outcome
//!
//! Each `Run` in an effect is started in order on its own tokio task.
//! Completions come back on the message channel in whatever order they
//! finish.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use tabdeck_core::prelude::*;

use crate::backend::Backend;
use crate::effect::{Command, Effect, Run};
use crate::history::SharedHistory;
use crate::message::Message;

/// Start every command in `effect`.
pub fn handle_effect<B>(
    effect: Effect<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
    history: SharedHistory,
) where
    B: Backend + Sync + 'static,
{
    for run in effect.into_runs() {
        debug!("Running {:?}", run.command());
        spawn_run(run, msg_tx.clone(), backend.clone(), history.clone());
    }
}

fn spawn_run<B>(
    run: Run<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
    history: SharedHistory,
) where
    B: Backend + Sync + 'static,
{
    tokio::spawn(async move {
        let command = run.command().clone();
        let outcome = execute(&command, backend.as_ref(), &history).await;

        match &outcome {
            Err(e) if e.is_fatal() => error!("{:?} failed: {}", command, e),
            Err(e) if e.is_recoverable() => debug!("{:?} failed: {}", command, e),
            Err(e) => warn!("{:?} failed: {}", command, e),
            Ok(_) => {}
        }

        if let Some(message) = run.complete(outcome) {
            if msg_tx.send(message).await.is_err() {
                warn!("Message channel closed, dropping effect result");
            }
        }
    });
}

async fn execute<B: Backend>(
    command: &Command,
    backend: &B,
    history: &SharedHistory,
) -> Result<Value> {
    match command {
        Command::Fetch { path } => backend.get_json(path).await,
        Command::PushLocation(_) | Command::HistoryBack | Command::HistoryForward => {
            apply_history(command, history)
        }
    }
}

fn apply_history(command: &Command, history: &SharedHistory) -> Result<Value> {
    let mut history = history
        .lock()
        .map_err(|_| Error::history("history lock poisoned"))?;

    match command {
        Command::PushLocation(location) => history.push(location.clone())?,
        Command::HistoryBack => {
            if !history.back()? {
                debug!("Already at the oldest history entry");
            }
        }
        Command::HistoryForward => {
            if !history.forward()? {
                debug!("Already at the newest history entry");
            }
        }
        Command::Fetch { .. } => {}
    }

    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::backend::MemoryBackend;
    use crate::history::BrowserHistory;
    use serde_json::json;
    use tabdeck_core::{FeatureFlags, NativeLocation};
    use tokio::time::{timeout, Duration};

    fn at(pathname: &str) -> NativeLocation {
        NativeLocation {
            pathname: pathname.to_string(),
            ..Default::default()
        }
    }

    async fn next(rx: &mut mpsc::Receiver<Message>) -> Message {
        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_fetch_success_dispatches_success_message() {
        let (tx, mut rx) = mpsc::channel(8);
        let backend = Arc::new(
            MemoryBackend::new().with_response("/feature-flags", json!({"weatherReports": true})),
        );
        let history = BrowserHistory::new(at("/")).into_shared();

        let effect = Effect::fetch("/feature-flags", |flags: FeatureFlags| {
            Message::App(app::Action::FetchFeatureFlagsSuccess(flags))
        });
        handle_effect(effect, tx, backend.clone(), history);

        assert_eq!(
            next(&mut rx).await,
            Message::App(app::Action::FetchFeatureFlagsSuccess(FeatureFlags {
                weather_reports: true
            }))
        );
        assert_eq!(backend.requests(), vec!["/feature-flags"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_uses_failure_constructor() {
        let (tx, mut rx) = mpsc::channel(8);
        let backend = Arc::new(MemoryBackend::new());
        let history = BrowserHistory::new(at("/")).into_shared();

        let effect = Effect::run(
            Run::new(Command::fetch("/missing"))
                .on_failure(|e| Message::NavigationFailed(e.to_string())),
        );
        handle_effect(effect, tx, backend, history);

        match next(&mut rx).await {
            Message::NavigationFailed(error) => assert!(error.contains("404")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_push_location_notifies_listener() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut history = BrowserHistory::new(at("/"));
        history.listen(tx.clone());
        let history = history.into_shared();

        let effect = Effect::run(Run::new(Command::PushLocation(at("/about"))));
        handle_effect(effect, tx, Arc::new(MemoryBackend::new()), history.clone());

        match next(&mut rx).await {
            Message::LocationChanged(location) => assert_eq!(location.paths, vec!["about"]),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(history.lock().unwrap().current().pathname, "/about");
    }

    #[tokio::test]
    async fn test_back_at_start_is_quiet() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut history = BrowserHistory::new(at("/"));
        history.listen(tx.clone());

        let effect = Effect::run(Run::new(Command::HistoryBack));
        handle_effect(effect, tx, Arc::new(MemoryBackend::new()), history.into_shared());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }
}
