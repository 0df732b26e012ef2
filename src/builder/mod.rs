//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for assembling a machine and for
//! defining states from closures without declaring a type per state.

pub mod error;
pub mod machine;
pub mod state;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use state::{FnState, StateBuilder};
