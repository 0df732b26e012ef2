//! End-to-end lifecycle scenarios driven through the public API.

use stackfsm::{MachineError, State, StateMachine, StateMachineBuilder, Transition};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PlayerState {
    Idle,
    Walk,
    Jump,
}

#[derive(Debug)]
enum InputEvent {
    Move,
    Jump,
    Land,
    Exit,
}

type Journal = Rc<RefCell<Vec<String>>>;

struct IdleState {
    journal: Journal,
}

impl State<PlayerState, InputEvent> for IdleState {
    fn id(&self) -> PlayerState {
        PlayerState::Idle
    }

    fn on_enter(&mut self) {
        self.journal.borrow_mut().push("Idle.on_enter".into());
    }

    fn on_exit(&mut self) {
        self.journal.borrow_mut().push("Idle.on_exit".into());
    }

    fn on_pause(&mut self) {
        self.journal.borrow_mut().push("Idle.on_pause".into());
    }

    fn on_resume(&mut self) {
        self.journal.borrow_mut().push("Idle.on_resume".into());
    }

    fn handle_event(&mut self, event: &InputEvent) -> Transition<PlayerState> {
        match event {
            InputEvent::Move => Transition::push(PlayerState::Walk),
            InputEvent::Exit => Transition::quit(),
            InputEvent::Jump | InputEvent::Land => Transition::none(),
        }
    }
}

struct WalkState {
    ticks: i32,
    journal: Journal,
}

impl State<PlayerState, InputEvent> for WalkState {
    fn id(&self) -> PlayerState {
        PlayerState::Walk
    }

    fn on_enter(&mut self) {
        self.journal.borrow_mut().push("Walk.on_enter".into());
    }

    fn on_exit(&mut self) {
        self.journal.borrow_mut().push("Walk.on_exit".into());
    }

    fn handle_event(&mut self, event: &InputEvent) -> Transition<PlayerState> {
        match event {
            InputEvent::Jump => Transition::switch(PlayerState::Jump),
            InputEvent::Exit => Transition::quit(),
            InputEvent::Move | InputEvent::Land => Transition::none(),
        }
    }

    fn on_update(&mut self) -> Transition<PlayerState> {
        self.ticks -= 1;
        self.journal
            .borrow_mut()
            .push(format!("Walk.on_update({})", self.ticks));
        if self.ticks < 0 {
            Transition::pop()
        } else {
            Transition::none()
        }
    }
}

struct JumpState {
    journal: Journal,
}

impl State<PlayerState, InputEvent> for JumpState {
    fn id(&self) -> PlayerState {
        PlayerState::Jump
    }

    fn on_enter(&mut self) {
        self.journal.borrow_mut().push("Jump.on_enter".into());
    }

    fn on_exit(&mut self) {
        self.journal.borrow_mut().push("Jump.on_exit".into());
    }

    fn handle_event(&mut self, event: &InputEvent) -> Transition<PlayerState> {
        match event {
            InputEvent::Land => Transition::pop(),
            _ => Transition::none(),
        }
    }
}

fn player(ticks: i32) -> (StateMachine<PlayerState, InputEvent>, Journal) {
    let journal: Journal = Rc::default();
    let machine: StateMachine<PlayerState, InputEvent> = StateMachineBuilder::new()
        .initial(IdleState {
            journal: Rc::clone(&journal),
        })
        .state(WalkState {
            ticks,
            journal: Rc::clone(&journal),
        })
        .state(JumpState {
            journal: Rc::clone(&journal),
        })
        .build()
        .unwrap();
    (machine, journal)
}

#[test]
fn idle_walk_scenario_produces_expected_hook_sequence() {
    let (mut machine, journal) = player(3);

    machine.start();
    machine.handle_event(&InputEvent::Move).unwrap();
    for _ in 0..4 {
        machine.update().unwrap();
    }

    assert_eq!(
        *journal.borrow(),
        vec![
            "Idle.on_enter",
            "Idle.on_pause",
            "Walk.on_enter",
            "Walk.on_update(2)",
            "Walk.on_update(1)",
            "Walk.on_update(0)",
            "Walk.on_update(-1)",
            "Walk.on_exit",
            "Idle.on_resume",
        ]
    );
    assert_eq!(machine.current_id(), Some(&PlayerState::Idle));
    assert_eq!(machine.depth(), 1);
    assert!(machine.is_running());
}

#[test]
fn idle_update_is_a_no_op() {
    let (mut machine, journal) = player(3);
    machine.start();

    machine.update().unwrap();
    machine.update().unwrap();

    assert_eq!(*journal.borrow(), vec!["Idle.on_enter"]);
    assert_eq!(machine.depth(), 1);
}

#[test]
fn switch_replaces_walk_and_pop_resumes_idle() {
    let (mut machine, journal) = player(10);
    machine.start();
    machine.handle_event(&InputEvent::Move).unwrap();
    journal.borrow_mut().clear();

    machine.handle_event(&InputEvent::Jump).unwrap();
    assert_eq!(
        machine.active_ids().copied().collect::<Vec<_>>(),
        vec![PlayerState::Idle, PlayerState::Jump]
    );

    machine.handle_event(&InputEvent::Land).unwrap();
    assert_eq!(
        *journal.borrow(),
        vec![
            "Walk.on_exit",
            "Jump.on_enter",
            "Jump.on_exit",
            "Idle.on_resume",
        ]
    );
    assert_eq!(machine.current_id(), Some(&PlayerState::Idle));
}

#[test]
fn walk_state_keeps_its_counter_across_reentry() {
    let (mut machine, journal) = player(1);
    machine.start();

    machine.handle_event(&InputEvent::Move).unwrap();
    machine.update().unwrap();
    machine.update().unwrap();
    assert_eq!(machine.current_id(), Some(&PlayerState::Idle));

    journal.borrow_mut().clear();
    machine.handle_event(&InputEvent::Move).unwrap();
    machine.update().unwrap();

    assert_eq!(
        *journal.borrow(),
        vec![
            "Idle.on_pause",
            "Walk.on_enter",
            "Walk.on_update(-2)",
            "Walk.on_exit",
            "Idle.on_resume",
        ]
    );
}

#[test]
fn exit_event_quits_from_any_depth() {
    let (mut machine, journal) = player(5);
    machine.start();
    machine.handle_event(&InputEvent::Move).unwrap();
    journal.borrow_mut().clear();

    machine.handle_event(&InputEvent::Exit).unwrap();

    assert_eq!(*journal.borrow(), vec!["Walk.on_exit", "Idle.on_exit"]);
    assert!(!machine.is_running());
    assert_eq!(machine.current_id(), None);

    journal.borrow_mut().clear();
    machine.update().unwrap();
    machine.handle_event(&InputEvent::Move).unwrap();
    machine.stop();
    assert!(journal.borrow().is_empty());
}

#[test]
fn restart_after_quit_enters_initial_state_again() {
    let (mut machine, journal) = player(5);
    machine.start();
    machine.handle_event(&InputEvent::Exit).unwrap();
    journal.borrow_mut().clear();

    machine.start();
    machine.start();

    assert_eq!(*journal.borrow(), vec!["Idle.on_enter"]);
    assert_eq!(machine.current_id(), Some(&PlayerState::Idle));
}

#[test]
fn rejected_jump_leaves_walk_running() {
    let journal: Journal = Rc::default();
    let mut machine: StateMachine<PlayerState, InputEvent> = StateMachineBuilder::new()
        .initial(IdleState {
            journal: Rc::clone(&journal),
        })
        .state(WalkState {
            ticks: 2,
            journal: Rc::clone(&journal),
        })
        .build()
        .unwrap();
    machine.start();
    machine.handle_event(&InputEvent::Move).unwrap();
    journal.borrow_mut().clear();

    let result = machine.handle_event(&InputEvent::Jump);

    assert_eq!(
        result,
        Err(MachineError::UnknownState {
            id: PlayerState::Jump
        })
    );
    assert!(journal.borrow().is_empty());
    assert_eq!(machine.current_id(), Some(&PlayerState::Walk));

    machine.update().unwrap();
    assert_eq!(*journal.borrow(), vec!["Walk.on_update(1)"]);
}

#[test]
fn registered_states_are_reachable_by_id() {
    let (mut machine, _journal) = player(3);

    assert_eq!(
        machine.get_state(&PlayerState::Jump).map(|state| state.id()),
        Some(PlayerState::Jump)
    );

    let walk = machine.get_state_mut(&PlayerState::Walk).unwrap();
    assert_eq!(walk.on_update(), Transition::None);
}
