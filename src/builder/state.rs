//! Builder for states assembled from closures.

use crate::core::{State, Transition};
use std::fmt;

type Hook = Box<dyn FnMut()>;
type EventHook<Id, E> = Box<dyn FnMut(&E) -> Transition<Id>>;
type PayloadHook<Id, E, P> = Box<dyn FnMut(&E, P) -> Transition<Id>>;
type UpdateHook<Id> = Box<dyn FnMut() -> Transition<Id>>;

/// A state whose hooks are closures.
///
/// Hooks that were not set behave like the [`State`] defaults. Build one
/// with [`StateBuilder`].
pub struct FnState<Id, E, P = ()> {
    id: Id,
    on_enter: Option<Hook>,
    on_exit: Option<Hook>,
    on_pause: Option<Hook>,
    on_resume: Option<Hook>,
    on_event: Option<EventHook<Id, E>>,
    on_event_with: Option<PayloadHook<Id, E, P>>,
    on_update: Option<UpdateHook<Id>>,
}

impl<Id: Clone, E, P> State<Id, E, P> for FnState<Id, E, P> {
    fn id(&self) -> Id {
        self.id.clone()
    }

    fn on_enter(&mut self) {
        if let Some(hook) = self.on_enter.as_mut() {
            hook();
        }
    }

    fn on_exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }

    fn on_pause(&mut self) {
        if let Some(hook) = self.on_pause.as_mut() {
            hook();
        }
    }

    fn on_resume(&mut self) {
        if let Some(hook) = self.on_resume.as_mut() {
            hook();
        }
    }

    fn handle_event(&mut self, event: &E) -> Transition<Id> {
        match self.on_event.as_mut() {
            Some(hook) => hook(event),
            None => Transition::None,
        }
    }

    fn handle_event_with(&mut self, event: &E, payload: P) -> Transition<Id> {
        match self.on_event_with.as_mut() {
            Some(hook) => hook(event, payload),
            None => Transition::None,
        }
    }

    fn on_update(&mut self) -> Transition<Id> {
        match self.on_update.as_mut() {
            Some(hook) => hook(),
            None => Transition::None,
        }
    }
}

impl<Id: fmt::Debug, E, P> fmt::Debug for FnState<Id, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnState")
            .field("id", &self.id)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .field("on_resume", &self.on_resume.is_some())
            .field("on_event", &self.on_event.is_some())
            .field("on_event_with", &self.on_event_with.is_some())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

/// Builder for [`FnState`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use stackfsm::builder::{FnState, StateBuilder};
/// use stackfsm::core::{State, Transition};
///
/// let mut ticks = 2;
/// let mut walk: FnState<&str, ()> = StateBuilder::new("walk")
///     .on_update(move || {
///         ticks -= 1;
///         if ticks < 0 {
///             Transition::Pop
///         } else {
///             Transition::None
///         }
///     })
///     .build();
///
/// assert_eq!(walk.on_update(), Transition::None);
/// assert_eq!(walk.on_update(), Transition::None);
/// assert_eq!(walk.on_update(), Transition::Pop);
/// ```
pub struct StateBuilder<Id, E, P = ()> {
    state: FnState<Id, E, P>,
}

impl<Id, E, P> StateBuilder<Id, E, P> {
    /// Start building a state registered under `id`.
    pub fn new(id: Id) -> Self {
        Self {
            state: FnState {
                id,
                on_enter: None,
                on_exit: None,
                on_pause: None,
                on_resume: None,
                on_event: None,
                on_event_with: None,
                on_update: None,
            },
        }
    }

    /// Set the hook run when the state is entered.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.state.on_enter = Some(Box::new(hook));
        self
    }

    /// Set the hook run when the state is exited.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.state.on_exit = Some(Box::new(hook));
        self
    }

    /// Set the hook run when a state is pushed above this one.
    pub fn on_pause<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.state.on_pause = Some(Box::new(hook));
        self
    }

    /// Set the hook run when this state becomes the top again.
    pub fn on_resume<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.state.on_resume = Some(Box::new(hook));
        self
    }

    /// Set the handler for events without payload.
    pub fn on_event<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&E) -> Transition<Id> + 'static,
    {
        self.state.on_event = Some(Box::new(hook));
        self
    }

    /// Set the handler for events carrying a payload.
    pub fn on_event_with<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&E, P) -> Transition<Id> + 'static,
    {
        self.state.on_event_with = Some(Box::new(hook));
        self
    }

    /// Set the tick handler.
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut() -> Transition<Id> + 'static,
    {
        self.state.on_update = Some(Box::new(hook));
        self
    }

    /// Finish the state.
    pub fn build(self) -> FnState<Id, E, P> {
        self.state
    }
}
