//! Stack machine that drives registered states through their lifecycle.

use super::error::MachineError;
use crate::core::{State, Transition};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, info, trace};

pub(crate) type BoxedState<Id, E, P> = Box<dyn State<Id, E, P>>;

struct Slot<Id, E, P> {
    id: Id,
    state: BoxedState<Id, E, P>,
}

/// Stack-based state machine.
///
/// States live in a registry keyed by their id for the whole lifetime of
/// the machine. The execution stack refers to registry entries, so a state
/// keeps its own data across pause, resume and re-entry.
///
/// # Example
///
/// ```rust
/// use stackfsm::core::{State, Transition};
/// use stackfsm::machine::StateMachine;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Screen {
///     Game,
///     Pause,
/// }
///
/// enum Key {
///     Escape,
/// }
///
/// struct Game;
/// struct Pause;
///
/// impl State<Screen, Key> for Game {
///     fn id(&self) -> Screen {
///         Screen::Game
///     }
///
///     fn handle_event(&mut self, _key: &Key) -> Transition<Screen> {
///         Transition::push(Screen::Pause)
///     }
/// }
///
/// impl State<Screen, Key> for Pause {
///     fn id(&self) -> Screen {
///         Screen::Pause
///     }
///
///     fn handle_event(&mut self, _key: &Key) -> Transition<Screen> {
///         Transition::pop()
///     }
/// }
///
/// let mut machine: StateMachine<Screen, Key> = StateMachine::new(Game);
/// machine.add_state(Pause).unwrap();
/// machine.start();
///
/// machine.handle_event(&Key::Escape).unwrap();
/// assert_eq!(machine.current_id(), Some(&Screen::Pause));
/// assert_eq!(machine.depth(), 2);
///
/// machine.handle_event(&Key::Escape).unwrap();
/// assert_eq!(machine.current_id(), Some(&Screen::Game));
/// assert_eq!(machine.depth(), 1);
/// ```
pub struct StateMachine<Id, E, P = ()> {
    slots: Vec<Slot<Id, E, P>>,
    registry: HashMap<Id, usize>,
    stack: Vec<usize>,
    initial: usize,
    running: bool,
}

impl<Id, E, P> StateMachine<Id, E, P>
where
    Id: Eq + Hash + Clone + Debug,
{
    /// Create a stopped machine whose first state is `initial`.
    ///
    /// The initial state is registered under its own id, so later
    /// transitions can target it.
    pub fn new<S>(initial: S) -> Self
    where
        S: State<Id, E, P> + 'static,
    {
        Self::from_boxed(Box::new(initial))
    }

    pub(crate) fn from_boxed(initial: BoxedState<Id, E, P>) -> Self {
        let id = initial.id();
        let mut registry = HashMap::new();
        registry.insert(id.clone(), 0);

        Self {
            slots: vec![Slot { id, state: initial }],
            registry,
            stack: Vec::new(),
            initial: 0,
            running: false,
        }
    }

    /// Register a state so transitions can target it by id.
    ///
    /// Fails with [`MachineError::DuplicateState`] if the id is taken.
    pub fn add_state<S>(&mut self, state: S) -> Result<(), MachineError<Id>>
    where
        S: State<Id, E, P> + 'static,
    {
        self.add_boxed(Box::new(state))
    }

    pub(crate) fn add_boxed(&mut self, state: BoxedState<Id, E, P>) -> Result<(), MachineError<Id>> {
        let index = self.slots.len();
        match self.registry.entry(state.id()) {
            Entry::Occupied(entry) => {
                debug!(id = ?entry.key(), "Rejected duplicate state registration");
                Err(MachineError::DuplicateState {
                    id: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(index);
                debug!(?id, "Registered state");
                self.slots.push(Slot { id, state });
                Ok(())
            }
        }
    }

    /// Look up a registered state.
    pub fn get_state(&self, id: &Id) -> Option<&dyn State<Id, E, P>> {
        let index = *self.registry.get(id)?;
        Some(self.slots[index].state.as_ref())
    }

    /// Look up a registered state for mutation.
    pub fn get_state_mut(&mut self, id: &Id) -> Option<&mut dyn State<Id, E, P>> {
        let index = *self.registry.get(id)?;
        Some(self.slots[index].state.as_mut())
    }

    /// Check whether a state with this id has been registered.
    pub fn is_registered(&self, id: &Id) -> bool {
        self.registry.contains_key(id)
    }

    /// Number of registered states, the initial state included.
    pub fn state_count(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the machine has been started and not stopped since.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Id of the top-of-stack state, `None` while stopped.
    pub fn current_id(&self) -> Option<&Id> {
        self.stack.last().map(|&index| &self.slots[index].id)
    }

    /// The top-of-stack state, `None` while stopped.
    pub fn current_state(&self) -> Option<&dyn State<Id, E, P>> {
        self.stack
            .last()
            .map(|&index| self.slots[index].state.as_ref())
    }

    /// Ids on the execution stack, bottom first.
    pub fn active_ids(&self) -> impl DoubleEndedIterator<Item = &Id> + '_ {
        self.stack.iter().map(|&index| &self.slots[index].id)
    }

    /// Number of states on the execution stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Enter the initial state and start running.
    ///
    /// Does nothing if already running. After a stop the stack is seeded
    /// with the initial state again.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.stack.is_empty() {
            self.stack.push(self.initial);
        }
        if let Some(&top) = self.stack.last() {
            info!(state = ?self.slots[top].id, "Starting state machine");
            self.enter(top);
        }
        self.running = true;
    }

    /// Exit every active state, top to bottom, and stop.
    ///
    /// Calling this on a stopped machine invokes no hooks.
    pub fn stop(&mut self) {
        if !self.stack.is_empty() {
            info!(depth = self.stack.len(), "Stopping state machine");
        }
        while let Some(index) = self.stack.pop() {
            self.exit(index);
        }
        self.running = false;
    }

    /// Tick the top-of-stack state and apply the transition it returns.
    ///
    /// Does nothing while stopped.
    pub fn update(&mut self) -> Result<(), MachineError<Id>> {
        let Some(top) = self.running_top() else {
            return Ok(());
        };
        let transition = self.slots[top].state.on_update();
        self.apply(transition)
    }

    /// Deliver an event to the top-of-stack state and apply the transition
    /// it returns.
    ///
    /// Does nothing while stopped.
    pub fn handle_event(&mut self, event: &E) -> Result<(), MachineError<Id>> {
        let Some(top) = self.running_top() else {
            return Ok(());
        };
        let transition = self.slots[top].state.handle_event(event);
        self.apply(transition)
    }

    /// Deliver an event with a payload to the top-of-stack state.
    ///
    /// The payload is dropped unread while stopped.
    pub fn handle_event_with(&mut self, event: &E, payload: P) -> Result<(), MachineError<Id>> {
        let Some(top) = self.running_top() else {
            return Ok(());
        };
        let transition = self.slots[top].state.handle_event_with(event, payload);
        self.apply(transition)
    }

    fn running_top(&self) -> Option<usize> {
        if self.running {
            self.stack.last().copied()
        } else {
            None
        }
    }

    fn apply(&mut self, transition: Transition<Id>) -> Result<(), MachineError<Id>> {
        if !self.running {
            return Ok(());
        }

        debug!(
            kind = ?transition.kind(),
            from = ?self.current_id(),
            target = ?transition.target(),
            depth = self.stack.len(),
            "Applying transition"
        );
        match &transition {
            Transition::None => return Ok(()),
            Transition::Pop => self.pop(),
            Transition::Push(target) => {
                let index = self.resolve(target, &self.stack)?;
                self.push(index);
            }
            Transition::Switch(target) => {
                let below = self.stack.len().saturating_sub(1);
                let index = self.resolve(target, &self.stack[..below])?;
                self.switch(index);
            }
            Transition::Quit => self.stop(),
        }
        Ok(())
    }

    /// Find the slot for `target`, rejecting it if it sits in `active`.
    fn resolve(&self, target: &Id, active: &[usize]) -> Result<usize, MachineError<Id>> {
        let Some(&index) = self.registry.get(target) else {
            debug!(?target, "Transition target is not registered");
            return Err(MachineError::UnknownState { id: target.clone() });
        };
        if active.contains(&index) {
            debug!(?target, "Transition target is already active");
            return Err(MachineError::AlreadyActive { id: target.clone() });
        }
        Ok(index)
    }

    fn pop(&mut self) {
        let Some(index) = self.stack.pop() else {
            return;
        };
        self.exit(index);

        match self.stack.last() {
            Some(&top) => self.resume(top),
            None => {
                info!("Execution stack emptied, stopping state machine");
                self.running = false;
            }
        }
    }

    fn push(&mut self, index: usize) {
        if let Some(&top) = self.stack.last() {
            self.pause(top);
        }
        self.stack.push(index);
        self.enter(index);
    }

    fn switch(&mut self, index: usize) {
        if let Some(top) = self.stack.pop() {
            self.exit(top);
        }
        self.stack.push(index);
        self.enter(index);
    }

    fn enter(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        trace!(state = ?slot.id, "on_enter");
        slot.state.on_enter();
    }

    fn exit(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        trace!(state = ?slot.id, "on_exit");
        slot.state.on_exit();
    }

    fn pause(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        trace!(state = ?slot.id, "on_pause");
        slot.state.on_pause();
    }

    fn resume(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        trace!(state = ?slot.id, "on_resume");
        slot.state.on_resume();
    }
}
