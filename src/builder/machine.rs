//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{BoxedState, StateMachine};
use std::fmt::Debug;
use std::hash::Hash;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use stackfsm::builder::{StateBuilder, StateMachineBuilder};
/// use stackfsm::core::Transition;
/// use stackfsm::machine::StateMachine;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Scene {
///     Title,
///     Play,
/// }
///
/// let mut machine: StateMachine<Scene, char> = StateMachineBuilder::new()
///     .initial(
///         StateBuilder::new(Scene::Title)
///             .on_event(|key: &char| match key {
///                 '\n' => Transition::switch(Scene::Play),
///                 _ => Transition::None,
///             })
///             .build(),
///     )
///     .state(StateBuilder::new(Scene::Play).build())
///     .build()
///     .unwrap();
///
/// machine.start();
/// machine.handle_event(&'\n').unwrap();
/// assert_eq!(machine.current_id(), Some(&Scene::Play));
/// ```
pub struct StateMachineBuilder<Id, E, P = ()> {
    initial: Option<BoxedState<Id, E, P>>,
    states: Vec<BoxedState<Id, E, P>>,
}

impl<Id, E, P> StateMachineBuilder<Id, E, P>
where
    Id: Eq + Hash + Clone + Debug,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial<S>(mut self, state: S) -> Self
    where
        S: State<Id, E, P> + 'static,
    {
        self.initial = Some(Box::new(state));
        self
    }

    /// Register an additional state.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<Id, E, P> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Register several boxed states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn State<Id, E, P>>>,
    {
        self.states.extend(states);
        self
    }

    /// Build the state machine, stopped.
    /// Returns an error if the initial state is missing or an id repeats.
    pub fn build(self) -> Result<StateMachine<Id, E, P>, BuildError<Id>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::from_boxed(initial);
        for state in self.states {
            machine
                .add_boxed(state)
                .map_err(|err| BuildError::DuplicateState {
                    id: err.id().clone(),
                })?;
        }

        Ok(machine)
    }
}

impl<Id, E, P> Default for StateMachineBuilder<Id, E, P>
where
    Id: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
