//! Pause Menu
//!
//! This example builds a game flow from closure states.
//!
//! Key concepts:
//! - StateBuilder defines states without a type per state
//! - Payload events carry data to the top-of-stack state
//! - Switch replaces a state, Quit unwinds everything
//!
//! Run with: cargo run --example pause_menu

use stackfsm::{BuildError, StateBuilder, StateMachine, StateMachineBuilder, Transition};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Scene {
    Title,
    Level,
    Pause,
    Credits,
}

#[derive(Debug)]
enum Input {
    Confirm,
    Escape,
    Score,
}

fn build(score: Rc<Cell<u32>>) -> Result<StateMachine<Scene, Input, u32>, BuildError<Scene>> {
    let title = StateBuilder::new(Scene::Title)
        .on_enter(|| println!("  [title] press confirm"))
        .on_exit(|| println!("  [title] bye"))
        .on_event(|input: &Input| match input {
            Input::Confirm => Transition::switch(Scene::Level),
            Input::Escape => Transition::quit(),
            Input::Score => Transition::none(),
        })
        .build();

    let level = StateBuilder::new(Scene::Level)
        .on_enter(|| println!("  [level] start"))
        .on_exit(|| println!("  [level] end"))
        .on_pause(|| println!("  [level] paused"))
        .on_resume(|| println!("  [level] resumed"))
        .on_event(|input: &Input| match input {
            Input::Escape => Transition::push(Scene::Pause),
            Input::Confirm => Transition::switch(Scene::Credits),
            Input::Score => Transition::none(),
        })
        .on_event_with(move |_input: &Input, points: u32| {
            score.set(score.get() + points);
            println!("  [level] +{points} points");
            Transition::none()
        })
        .build();

    let pause = StateBuilder::new(Scene::Pause)
        .on_enter(|| println!("  [pause] menu open"))
        .on_exit(|| println!("  [pause] menu closed"))
        .on_event(|input: &Input| match input {
            Input::Escape => Transition::pop(),
            Input::Confirm => Transition::quit(),
            Input::Score => Transition::none(),
        })
        .build();

    let credits = StateBuilder::new(Scene::Credits)
        .on_enter(|| println!("  [credits] rolling"))
        .on_update(Transition::quit)
        .build();

    StateMachineBuilder::new()
        .initial(title)
        .state(level)
        .state(pause)
        .state(credits)
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Pause Menu Example ===\n");

    let score = Rc::new(Cell::new(0));
    let mut machine = build(Rc::clone(&score))?;
    machine.start();

    machine.handle_event(&Input::Confirm)?;
    machine.handle_event_with(&Input::Score, 150)?;
    machine.handle_event(&Input::Escape)?;
    println!("Stack: {:?}", machine.active_ids().collect::<Vec<_>>());

    // Payload events only reach the top state, which is the pause menu now.
    machine.handle_event_with(&Input::Score, 999)?;
    machine.handle_event(&Input::Escape)?;
    machine.handle_event(&Input::Confirm)?;
    machine.update()?;

    println!("\nRunning: {}", machine.is_running());
    println!("Score: {}", score.get());

    println!("\n=== Example Complete ===");
    Ok(())
}
