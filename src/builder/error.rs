//! Build errors for the state machine builder.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<Id: Debug> {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State {id:?} was added more than once")]
    DuplicateState { id: Id },
}
