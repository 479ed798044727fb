// Forward-only navigation over the step registry

pub mod state_machine;

pub use state_machine::{NavEvent, Navigation, NavigationMachine, NavigationSnapshot};
