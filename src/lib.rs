//! Stackfsm: a stack-based finite state machine
//!
//! A machine holds a registry of named states and an execution stack. The
//! state on top of the stack receives events and ticks and answers each
//! with a [`Transition`] that the machine applies immediately:
//!
//! - **Push** pauses the current state and enters a new one above it
//! - **Switch** exits the current state and enters a new one in its place
//! - **Pop** exits the current state and resumes the one below it
//! - **Quit** exits every active state, top to bottom
//!
//! # Core Concepts
//!
//! - **State**: lifecycle and input hooks via the `State` trait, each with
//!   a no-op default
//! - **Transition**: value returned by a hook describing the stack change
//! - **StateMachine**: registry, execution stack and transition interpreter
//!
//! # Example
//!
//! ```rust
//! use stackfsm::{State, StateMachine, Transition};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum PlayerState {
//!     Idle,
//!     Walk,
//! }
//!
//! enum Input {
//!     Move,
//! }
//!
//! struct Idle;
//!
//! impl State<PlayerState, Input> for Idle {
//!     fn id(&self) -> PlayerState {
//!         PlayerState::Idle
//!     }
//!
//!     fn handle_event(&mut self, event: &Input) -> Transition<PlayerState> {
//!         match event {
//!             Input::Move => Transition::push(PlayerState::Walk),
//!         }
//!     }
//! }
//!
//! struct Walk {
//!     ticks: i32,
//! }
//!
//! impl State<PlayerState, Input> for Walk {
//!     fn id(&self) -> PlayerState {
//!         PlayerState::Walk
//!     }
//!
//!     fn on_update(&mut self) -> Transition<PlayerState> {
//!         self.ticks -= 1;
//!         if self.ticks < 0 {
//!             Transition::Pop
//!         } else {
//!             Transition::None
//!         }
//!     }
//! }
//!
//! let mut machine: StateMachine<PlayerState, Input> = StateMachine::new(Idle);
//! machine.add_state(Walk { ticks: 3 })?;
//! machine.start();
//!
//! machine.handle_event(&Input::Move)?;
//! for _ in 0..4 {
//!     machine.update()?;
//! }
//!
//! assert_eq!(machine.current_id(), Some(&PlayerState::Idle));
//! assert_eq!(machine.depth(), 1);
//! # Ok::<(), stackfsm::MachineError<PlayerState>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateBuilder, StateMachineBuilder};
pub use self::core::{State, Transition, TransitionKind};
pub use machine::{MachineError, StateMachine};
