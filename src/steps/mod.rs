// Workflow step catalog and the fixture data the screens display

pub mod fixtures;
pub mod registry;
pub mod types;

pub use registry::{instruction_for, step_at, step_by_id, step_count, steps, STEPS};
pub use types::{Actor, Blueprint, Step, StepKind};
