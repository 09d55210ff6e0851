//! Effect values returned alongside state transitions
//!
//! An [`Effect`] describes work to perform *after* a state transition. It is
//! plain data: reducers build effects, and only the interpreter in
//! [`crate::actions`] executes them. Completed work re-enters the update
//! loop as an action produced by the effect's success or failure
//! constructor.
//!
//! Parents lift a child's effects into their own action namespace with
//! [`Effect::map`], which wraps the constructors without running anything.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tabdeck_core::prelude::*;
use tabdeck_core::NativeLocation;

/// The async work a [`Run`] effect asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// GET `path` from the backend; resolves to the JSON body
    Fetch { path: String },
    /// Push a location onto the navigation history; resolves to `null`
    PushLocation(NativeLocation),
    /// Step the history back one entry; resolves to `null`
    HistoryBack,
    /// Step the history forward one entry; resolves to `null`
    HistoryForward,
}

impl Command {
    pub fn fetch(path: impl Into<String>) -> Self {
        Self::Fetch { path: path.into() }
    }
}

type SuccessFn<A> = Box<dyn FnOnce(Value) -> Result<A> + Send>;
type FailureFn<A> = Box<dyn FnOnce(Error) -> A + Send>;
type Lift<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// A single async command plus the constructors for its outcome.
///
/// Without a success constructor the result is discarded. Without a
/// failure constructor errors (including a success payload that fails to
/// decode) are logged and dropped.
pub struct Run<A> {
    command: Command,
    on_success: Option<SuccessFn<A>>,
    on_failure: Option<FailureFn<A>>,
}

impl<A: Send + 'static> Run<A> {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            on_success: None,
            on_failure: None,
        }
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Value) -> Result<A> + Send + 'static,
    {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Success constructor that first decodes the JSON payload into `T`.
    pub fn on_decoded<T, F>(self, f: F) -> Self
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> A + Send + 'static,
    {
        self.on_success(move |value| Ok(f(serde_json::from_value(value)?)))
    }

    pub fn on_failure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Error) -> A + Send + 'static,
    {
        self.on_failure = Some(Box::new(f));
        self
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn has_failure_handler(&self) -> bool {
        self.on_failure.is_some()
    }

    /// Turn the outcome of the command into the action to dispatch, if any.
    pub fn complete(self, outcome: Result<Value>) -> Option<A> {
        let Run {
            command,
            on_success,
            on_failure,
        } = self;

        let result = match outcome {
            Ok(value) => match on_success {
                Some(f) => f(value).map(Some),
                None => Ok(None),
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(action) => action,
            Err(error) => match on_failure {
                Some(f) => Some(f(error)),
                None => {
                    warn!("Unhandled failure for {:?}: {}", command, error);
                    None
                }
            },
        }
    }

    fn map_with<B: Send + 'static>(self, lift: Lift<A, B>) -> Run<B> {
        let Run {
            command,
            on_success,
            on_failure,
        } = self;

        let on_success = on_success.map(|f| {
            let lift = lift.clone();
            Box::new(move |value: Value| f(value).map(|a| lift(a))) as SuccessFn<B>
        });
        let on_failure = on_failure.map(|f| {
            let lift = lift.clone();
            Box::new(move |error: Error| lift(f(error))) as FailureFn<B>
        });

        Run {
            command,
            on_success,
            on_failure,
        }
    }
}

impl<A> fmt::Debug for Run<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("command", &self.command)
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

/// Work to perform after a state transition
pub enum Effect<A> {
    /// Nothing to do
    None,
    /// Run one command
    Run(Run<A>),
    /// Run several effects, started in order; completions may arrive in any order
    Batch(Vec<Effect<A>>),
}

impl<A> Default for Effect<A> {
    fn default() -> Self {
        Effect::None
    }
}

impl<A: Send + 'static> Effect<A> {
    pub fn none() -> Self {
        Effect::None
    }

    pub fn run(run: Run<A>) -> Self {
        Effect::Run(run)
    }

    /// Fetch `path` and decode the body into `T` for the success action.
    pub fn fetch<T, F>(path: impl Into<String>, on_success: F) -> Self
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> A + Send + 'static,
    {
        Effect::Run(Run::new(Command::fetch(path)).on_decoded(on_success))
    }

    /// Combine effects in order, dropping no-ops.
    pub fn batch(effects: Vec<Effect<A>>) -> Self {
        let mut effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }

    /// This effect followed by `other`.
    pub fn and(self, other: Effect<A>) -> Self {
        Effect::batch(vec![self, other])
    }

    pub fn is_none(&self) -> bool {
        match self {
            Effect::None => true,
            Effect::Run(_) => false,
            Effect::Batch(effects) => effects.iter().all(Effect::is_none),
        }
    }

    /// Number of `Run` effects contained
    pub fn count(&self) -> usize {
        match self {
            Effect::None => 0,
            Effect::Run(_) => 1,
            Effect::Batch(effects) => effects.iter().map(Effect::count).sum(),
        }
    }

    /// Commands in execution order
    pub fn commands(&self) -> Vec<&Command> {
        match self {
            Effect::None => Vec::new(),
            Effect::Run(run) => vec![run.command()],
            Effect::Batch(effects) => effects.iter().flat_map(Effect::commands).collect(),
        }
    }

    /// Runs in execution order
    pub fn into_runs(self) -> Vec<Run<A>> {
        match self {
            Effect::None => Vec::new(),
            Effect::Run(run) => vec![run],
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::into_runs).collect(),
        }
    }

    /// Lift every action this effect can produce through `f`.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map_with(Arc::new(f))
    }

    fn map_with<B: Send + 'static>(self, lift: Lift<A, B>) -> Effect<B> {
        match self {
            Effect::None => Effect::None,
            Effect::Run(run) => Effect::Run(run.map_with(lift)),
            Effect::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|e| e.map_with(lift.clone()))
                    .collect(),
            ),
        }
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Run(run) => f.debug_tuple("Run").field(run).finish(),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Inner {
        Loaded(Vec<u32>),
        Failed(String),
    }

    #[derive(Debug, PartialEq)]
    enum Outer {
        Child(Inner),
    }

    fn fetch_numbers() -> Effect<Inner> {
        Effect::run(
            Run::new(Command::fetch("/numbers"))
                .on_decoded(Inner::Loaded)
                .on_failure(|e| Inner::Failed(e.to_string())),
        )
    }

    #[test]
    fn test_batch_drops_noops_and_unwraps_single() {
        let effect: Effect<Inner> = Effect::batch(vec![Effect::none(), Effect::none()]);
        assert!(matches!(effect, Effect::None));

        let effect = Effect::batch(vec![Effect::none(), fetch_numbers()]);
        assert!(matches!(effect, Effect::Run(_)));

        let effect = Effect::batch(vec![fetch_numbers(), fetch_numbers()]);
        assert!(matches!(effect, Effect::Batch(_)));
        assert_eq!(effect.count(), 2);
    }

    #[test]
    fn test_commands_preserve_order() {
        let effect: Effect<Inner> = Effect::batch(vec![
            Effect::fetch("/a", |_: Value| Inner::Loaded(vec![])),
            Effect::batch(vec![
                Effect::fetch("/b", |_: Value| Inner::Loaded(vec![])),
                Effect::fetch("/c", |_: Value| Inner::Loaded(vec![])),
            ]),
        ]);

        assert_eq!(
            effect.commands(),
            vec![
                &Command::fetch("/a"),
                &Command::fetch("/b"),
                &Command::fetch("/c")
            ]
        );
    }

    #[test]
    fn test_complete_decodes_success() {
        let run = fetch_numbers().into_runs().remove(0);
        assert_eq!(
            run.complete(Ok(json!([1, 2]))),
            Some(Inner::Loaded(vec![1, 2]))
        );
    }

    #[test]
    fn test_decode_error_goes_to_failure_constructor() {
        let run = fetch_numbers().into_runs().remove(0);
        let action = run.complete(Ok(json!({"not": "a list"})));
        assert!(matches!(action, Some(Inner::Failed(_))));
    }

    #[test]
    fn test_failure_without_handler_is_swallowed() {
        let run = Run::new(Command::fetch("/x")).on_decoded(Inner::Loaded);
        assert!(!run.has_failure_handler());
        assert_eq!(run.complete(Err(Error::http("refused"))), None);
    }

    #[test]
    fn test_missing_success_constructor_discards_result() {
        let run: Run<Inner> = Run::new(Command::fetch("/x"));
        assert_eq!(run.complete(Ok(json!(null))), None);
    }

    #[test]
    fn test_map_lifts_both_constructors() {
        let lifted = fetch_numbers().map(Outer::Child);
        assert_eq!(lifted.commands(), vec![&Command::fetch("/numbers")]);

        let run = lifted.into_runs().remove(0);
        assert_eq!(
            run.complete(Ok(json!([7]))),
            Some(Outer::Child(Inner::Loaded(vec![7])))
        );

        let run = fetch_numbers().map(Outer::Child).into_runs().remove(0);
        assert!(matches!(
            run.complete(Err(Error::http("down"))),
            Some(Outer::Child(Inner::Failed(_)))
        ));
    }

    #[test]
    fn test_is_none_for_nested_empty_batch() {
        let effect: Effect<Inner> = Effect::Batch(vec![Effect::None, Effect::Batch(vec![])]);
        assert!(effect.is_none());
        assert_eq!(effect.count(), 0);
    }
}
