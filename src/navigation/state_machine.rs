use serde::Serialize;
use statig::prelude::*;

/// Inputs accepted by the navigation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Start,
    Advance,
    Restart,
}

/// Read-only view of the navigation state handed to the rest of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub started: bool,
    pub current_step_index: usize,
}

impl NavigationSnapshot {
    pub const INITIAL: NavigationSnapshot = NavigationSnapshot {
        started: false,
        current_step_index: 0,
    };
}

/// Linear chain `landing -> walking(0..n) -> done`, with restart back to landing.
#[derive(Debug, Default)]
pub struct NavigationMachine {
    pub step_count: usize,
}

impl NavigationMachine {
    pub fn new(step_count: usize) -> Self {
        Self { step_count }
    }

    fn first_state(&self) -> State {
        if self.step_count == 0 {
            State::done()
        } else {
            State::walking(0)
        }
    }
}

#[state_machine(initial = "State::landing()")]
impl NavigationMachine {
    #[state]
    fn landing(&mut self, event: &NavEvent) -> Outcome<State> {
        match event {
            NavEvent::Start => {
                tracing::info!(step_count = self.step_count, "Walkthrough started");
                Transition(self.first_state())
            }
            NavEvent::Advance | NavEvent::Restart => Handled,
        }
    }

    #[state]
    fn walking(&mut self, index: &mut usize, event: &NavEvent) -> Outcome<State> {
        match event {
            NavEvent::Advance => {
                let next = *index + 1;
                if next >= self.step_count {
                    tracing::info!(from_index = *index, "Workflow reached closure");
                    Transition(State::done())
                } else {
                    tracing::info!(from_index = *index, to_index = next, "Advanced to next step");
                    Transition(State::walking(next))
                }
            }
            NavEvent::Restart => {
                tracing::info!(from_index = *index, "Walkthrough restarted");
                Transition(State::landing())
            }
            NavEvent::Start => Handled,
        }
    }

    #[state]
    fn done(&mut self, event: &NavEvent) -> Outcome<State> {
        match event {
            NavEvent::Restart => {
                tracing::info!("Walkthrough restarted from closure");
                Transition(State::landing())
            }
            NavEvent::Advance => {
                tracing::debug!("Advance ignored at closure");
                Handled
            }
            NavEvent::Start => Handled,
        }
    }
}

/// Owned navigation container held by the composition root.
pub struct Navigation {
    machine: StateMachine<NavigationMachine>,
    step_count: usize,
}

impl Navigation {
    pub fn new(step_count: usize) -> Self {
        Self {
            machine: NavigationMachine::new(step_count).state_machine(),
            step_count,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        match self.machine.state() {
            State::Landing { .. } => NavigationSnapshot::INITIAL,
            State::Walking { index } => NavigationSnapshot {
                started: true,
                current_step_index: *index,
            },
            State::Done { .. } => NavigationSnapshot {
                started: true,
                current_step_index: self.step_count,
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.machine.state(), State::Done { .. })
    }

    pub fn start(&mut self) -> NavigationSnapshot {
        self.machine.handle(&NavEvent::Start);
        self.snapshot()
    }

    /// Move forward one step. A no-op before start and at closure.
    pub fn advance(&mut self) -> NavigationSnapshot {
        self.machine.handle(&NavEvent::Advance);
        self.snapshot()
    }

    /// Unconditional reset to `(false, 0)`.
    pub fn restart(&mut self) -> NavigationSnapshot {
        self.machine.handle(&NavEvent::Restart);
        self.snapshot()
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("snapshot", &self.snapshot())
            .field("step_count", &self.step_count)
            .finish()
    }
}
