//! Player Walk
//!
//! This example drives a two-state player controller.
//!
//! Key concepts:
//! - Push pauses the idle state while walking
//! - Ticks reach only the top-of-stack state
//! - Pop resumes the paused state
//!
//! Run with: RUST_LOG=stackfsm=trace cargo run --example player_walk

use stackfsm::{MachineError, State, StateMachine, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum PlayerState {
    Idle,
    Walk,
}

enum InputEvent {
    Move,
}

struct IdleState;

impl State<PlayerState, InputEvent> for IdleState {
    fn id(&self) -> PlayerState {
        PlayerState::Idle
    }

    fn on_enter(&mut self) {
        println!("Enter IdleState");
    }

    fn on_exit(&mut self) {
        println!("Exit IdleState");
    }

    fn on_pause(&mut self) {
        println!("Pause IdleState");
    }

    fn on_resume(&mut self) {
        println!("Resume IdleState");
    }

    fn handle_event(&mut self, event: &InputEvent) -> Transition<PlayerState> {
        match event {
            InputEvent::Move => Transition::push(PlayerState::Walk),
        }
    }
}

struct WalkState {
    ticks: i32,
}

impl State<PlayerState, InputEvent> for WalkState {
    fn id(&self) -> PlayerState {
        PlayerState::Walk
    }

    fn on_enter(&mut self) {
        println!("Enter WalkState");
    }

    fn on_exit(&mut self) {
        println!("Exit WalkState");
    }

    fn on_update(&mut self) -> Transition<PlayerState> {
        self.ticks -= 1;
        if self.ticks < 0 {
            return Transition::pop();
        }
        println!("Tick WalkState ({} left)", self.ticks);
        Transition::none()
    }
}

fn main() -> Result<(), MachineError<PlayerState>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Player Walk Example ===\n");

    let mut machine: StateMachine<PlayerState, InputEvent> = StateMachine::new(IdleState);
    machine.add_state(WalkState { ticks: 3 })?;
    machine.start();

    machine.handle_event(&InputEvent::Move)?;
    for _ in 0..4 {
        machine.update()?;
    }

    println!("\nActive state: {:?}", machine.current_id());
    println!("Stack depth: {}", machine.depth());

    machine.stop();

    println!("\n=== Example Complete ===");
    Ok(())
}
