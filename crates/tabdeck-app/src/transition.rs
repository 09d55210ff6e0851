//! Transition results and their composition helpers
//!
//! Every reducer returns a [`Transition`]: the next state paired with the
//! effect to run afterwards. A parent embeds a child by mapping the child's
//! state into its own ([`Transition::map_state`]) and lifting the child's
//! actions into its own namespace ([`Transition::map_effect`]).

use crate::effect::Effect;

/// Next state plus the effect to run after committing it
#[derive(Debug)]
#[must_use = "a transition carries an effect that must be run"]
pub struct Transition<S, A> {
    pub state: S,
    pub effect: Effect<A>,
}

impl<S, A: Send + 'static> Transition<S, A> {
    pub fn new(state: S, effect: Effect<A>) -> Self {
        Self { state, effect }
    }

    /// Transition with no effect
    pub fn pure(state: S) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }

    pub fn map_state<T, F>(self, f: F) -> Transition<T, A>
    where
        F: FnOnce(S) -> T,
    {
        Transition {
            state: f(self.state),
            effect: self.effect,
        }
    }

    pub fn map_effect<B, G>(self, g: G) -> Transition<S, B>
    where
        B: Send + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        Transition {
            state: self.state,
            effect: self.effect.map(g),
        }
    }

    pub fn map_both<T, B, F, G>(self, f: F, g: G) -> Transition<T, B>
    where
        B: Send + 'static,
        F: FnOnce(S) -> T,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map_state(f).map_effect(g)
    }

    /// Append `effect` after this transition's own effect.
    pub fn with_effect(self, effect: Effect<A>) -> Self {
        Transition {
            state: self.state,
            effect: self.effect.and(effect),
        }
    }

    pub fn into_parts(self) -> (S, Effect<A>) {
        (self.state, self.effect)
    }
}

/// Combine independent transitions into one over the list of their states.
///
/// States keep their order, and effects are batched in the same order.
pub fn flatten<S, A: Send + 'static>(transitions: Vec<Transition<S, A>>) -> Transition<Vec<S>, A> {
    let (states, effects): (Vec<S>, Vec<Effect<A>>) =
        transitions.into_iter().map(Transition::into_parts).unzip();

    Transition::new(states, Effect::batch(effects))
}
