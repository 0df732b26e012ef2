//! Transition descriptors returned by state hooks.

use serde::{Deserialize, Serialize};

/// Kind of stack operation a [`Transition`] requests, without its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Leave the stack untouched
    None,
    /// Remove the current state and resume the one below it
    Pop,
    /// Pause the current state and enter a new one above it
    Push,
    /// Exit the current state and enter a new one in its place
    Switch,
    /// Exit every active state and stop the machine
    Quit,
}

/// Requested effect of handling an event or a tick.
///
/// Descriptors are plain values: building one has no side effects and
/// performs no validation. An unregistered `Push`/`Switch` target is only
/// detected when the machine applies the descriptor.
///
/// # Example
///
/// ```rust
/// use stackfsm::core::{Transition, TransitionKind};
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// enum Screen {
///     Title,
///     Options,
/// }
///
/// let push = Transition::push(Screen::Options);
/// assert_eq!(push.kind(), TransitionKind::Push);
/// assert_eq!(push.target(), Some(&Screen::Options));
///
/// let pop: Transition<Screen> = Transition::pop();
/// assert_eq!(pop.target(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition<Id> {
    /// No stack change
    None,
    /// Remove the top state, resuming the state beneath it if any
    Pop,
    /// Pause the top state and enter the target above it
    Push(Id),
    /// Exit the top state and enter the target in its place
    Switch(Id),
    /// Unwind the whole stack and stop the machine
    Quit,
}

impl<Id> Default for Transition<Id> {
    fn default() -> Self {
        Transition::None
    }
}

impl<Id> Transition<Id> {
    /// Stay in the current state.
    pub fn none() -> Self {
        Transition::None
    }

    /// Leave the current state and resume the one below it.
    pub fn pop() -> Self {
        Transition::Pop
    }

    /// Pause the current state and enter `target` above it.
    pub fn push(target: Id) -> Self {
        Transition::Push(target)
    }

    /// Replace the current state with `target`.
    pub fn switch(target: Id) -> Self {
        Transition::Switch(target)
    }

    /// Exit every active state and stop the machine.
    pub fn quit() -> Self {
        Transition::Quit
    }

    /// The operation this descriptor requests.
    pub fn kind(&self) -> TransitionKind {
        match self {
            Transition::None => TransitionKind::None,
            Transition::Pop => TransitionKind::Pop,
            Transition::Push(_) => TransitionKind::Push,
            Transition::Switch(_) => TransitionKind::Switch,
            Transition::Quit => TransitionKind::Quit,
        }
    }

    /// Target state of a `Push` or `Switch`, `None` for the other kinds.
    pub fn target(&self) -> Option<&Id> {
        match self {
            Transition::Push(id) | Transition::Switch(id) => Some(id),
            Transition::None | Transition::Pop | Transition::Quit => None,
        }
    }

    /// Check if this descriptor leaves the stack untouched.
    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }
}
