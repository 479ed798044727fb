// procure-flow library - Project MnM procurement walkthrough
// Exposes the walkthrough core for the binary and for integration tests

pub mod cli;
pub mod config;
pub mod errors;
pub mod guide;
pub mod input;
pub mod navigation;
pub mod observability;
pub mod render;
pub mod router;
pub mod screens;
pub mod shutdown;
pub mod steps;
pub mod telemetry;
pub mod timers;
pub mod walkthrough;

// Re-export key types for easy access
pub use crate::config::ProcureFlowConfig;
pub use crate::errors::{WalkthroughError, WalkthroughResult};
pub use crate::guide::GuideShell;
pub use crate::input::Input;
pub use crate::navigation::{Navigation, NavigationSnapshot};
pub use crate::observability::{WalkthroughMetrics, WalkthroughStats};
pub use crate::router::{route, ScreenKind};
pub use crate::screens::{Phase, Screen, ScreenAction, ScreenModel};
pub use crate::shutdown::ShutdownCoordinator;
pub use crate::steps::{step_at, step_by_id, steps, Actor, Step, StepKind};
pub use crate::telemetry::{create_session_span, generate_session_id, init_telemetry};
pub use crate::timers::{PhaseScript, TimerGroup, TimerSignal};
pub use crate::walkthrough::{EndReason, SessionOutcome, Walkthrough, WalkthroughSettings};
