//! The stack-based state machine.
//!
//! The machine owns a registry of states and an execution stack. The top
//! of the stack is the running state; every state below it is paused.
//! Events and ticks go to the top state, and the [`Transition`] it returns
//! is applied to the stack before control returns to the caller.
//!
//! # Key Concepts
//!
//! - **Push**: pause the top state and enter a new one above it
//! - **Switch**: exit the top state and enter a new one in its place
//! - **Pop**: exit the top state and resume the one below it
//! - **Quit**: exit every state, top to bottom, and stop
//!
//! The machine is single-threaded and synchronous. Hosts that need shared
//! access wrap the whole machine in one lock.
//!
//! [`Transition`]: crate::core::Transition

mod engine;
mod error;

pub(crate) use engine::BoxedState;
pub use engine::StateMachine;
pub use error::MachineError;
