// Scripted phase timers, cancelled as one group per mounted screen

pub mod group;
pub mod script;

pub use group::{TimerGroup, TimerSignal};
pub use script::{Cue, PhaseScript};
