//! Core state machine types.
//!
//! This module contains the building blocks shared by the machine and its
//! hosts:
//! - The `State` trait with default no-op lifecycle hooks
//! - `Transition` descriptors returned by those hooks

mod state;
mod transition;

pub use state::State;
pub use transition::{Transition, TransitionKind};
