//! Errors raised while registering states or applying transitions.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur when configuring or driving a state machine.
///
/// Transition errors are detected before the stack is touched, so the
/// machine is left exactly as it was when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError<Id: Debug> {
    #[error("State {id:?} is already registered")]
    DuplicateState { id: Id },

    #[error("Transition target {id:?} is not registered")]
    UnknownState { id: Id },

    #[error("State {id:?} is already on the execution stack")]
    AlreadyActive { id: Id },
}

impl<Id: Debug> MachineError<Id> {
    /// Identifier of the state the error refers to.
    pub fn id(&self) -> &Id {
        match self {
            MachineError::DuplicateState { id }
            | MachineError::UnknownState { id }
            | MachineError::AlreadyActive { id } => id,
        }
    }
}
