//! Core State trait for stack machine states.
//!
//! A state is a unit of behavior the machine drives through lifecycle
//! hooks. Every hook has a no-op default, so a concrete state overrides
//! only what it reacts to.

use super::transition::Transition;

/// Trait for states driven by a [`StateMachine`](crate::machine::StateMachine).
///
/// # Type Parameters
///
/// - `Id`: identifier the state is registered under
/// - `E`: event type delivered through `handle_event`
/// - `P`: opaque payload type delivered through `handle_event_with`
///
/// # Lifecycle
///
/// - `on_enter` runs when the state becomes top of stack through start,
///   push or switch.
/// - `on_exit` runs when the state leaves the stack through pop, switch or
///   a full unwind.
/// - `on_pause` runs when another state is pushed above it.
/// - `on_resume` runs when it becomes top of stack again after a pop.
///
/// Only the top-of-stack state receives events and ticks.
///
/// # Example
///
/// ```rust
/// use stackfsm::core::{State, Transition};
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// enum PlayerState {
///     Idle,
///     Walk,
/// }
///
/// enum Input {
///     Move,
/// }
///
/// struct IdleState;
///
/// impl State<PlayerState, Input> for IdleState {
///     fn id(&self) -> PlayerState {
///         PlayerState::Idle
///     }
///
///     fn handle_event(&mut self, event: &Input) -> Transition<PlayerState> {
///         match event {
///             Input::Move => Transition::push(PlayerState::Walk),
///         }
///     }
/// }
///
/// let mut idle = IdleState;
/// assert_eq!(idle.id(), PlayerState::Idle);
/// assert_eq!(idle.on_update(), Transition::None);
/// ```
pub trait State<Id, E, P = ()> {
    /// Identifier this state is registered under.
    ///
    /// Must return the same value for the lifetime of the state.
    fn id(&self) -> Id;

    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn on_pause(&mut self) {}

    fn on_resume(&mut self) {}

    /// React to an event without payload.
    ///
    /// Default implementation returns [`Transition::None`].
    fn handle_event(&mut self, _event: &E) -> Transition<Id> {
        Transition::None
    }

    /// React to an event carrying a payload.
    ///
    /// Default implementation returns [`Transition::None`].
    fn handle_event_with(&mut self, _event: &E, _payload: P) -> Transition<Id> {
        Transition::None
    }

    /// React to a periodic tick.
    ///
    /// Default implementation returns [`Transition::None`].
    fn on_update(&mut self) -> Transition<Id> {
        Transition::None
    }
}
