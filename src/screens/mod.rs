//! Screen families rendered for each step.
//!
//! A screen owns only its ephemeral state. It never touches navigation:
//! it answers inputs and timer phases with a [`ScreenAction`] and the
//! walkthrough decides what happens next.

pub mod dashboard;
pub mod goods_receipt;
pub mod landing;
pub mod negotiation;
pub mod nomination;
pub mod payment;
pub mod summary;
pub mod terminal;
pub mod timeline;

pub use dashboard::{DashboardPhase, PmDashboard};
pub use goods_receipt::{GoodsReceiptPhase, GoodsReceiptScreen};
pub use landing::Landing;
pub use negotiation::{NegotiationPhase, NegotiationScreen};
pub use nomination::NominationForm;
pub use payment::{PaymentPhase, PaymentScreen};
pub use summary::ProjectSummary;
pub use terminal::{TerminalLog, TerminalPhase};

use crate::input::Input;
use crate::router::ScreenKind;
use crate::steps::Step;
use crate::timers::PhaseScript;

/// Everything a timer group can deliver back to the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dashboard(DashboardPhase),
    Negotiation(NegotiationPhase),
    Payment(PaymentPhase),
    GoodsReceipt(GoodsReceiptPhase),
    Terminal(TerminalPhase),
    /// End of an automated sequence: move to the next step
    Advance,
    /// Synthesised user input in autoplay mode
    Autoplay(Input),
}

/// What a screen asks of the walkthrough after handling an input or phase.
#[derive(Debug, PartialEq)]
pub enum ScreenAction {
    Ignored,
    Redraw,
    Notice(&'static str),
    Schedule(PhaseScript<Phase>),
    Advance,
    Start,
    Restart,
}

pub trait ScreenModel {
    fn title(&self) -> String;

    /// Script started as soon as the screen is mounted
    fn mount_script(&self) -> Option<PhaseScript<Phase>> {
        None
    }

    fn handle_input(&mut self, input: Input) -> ScreenAction {
        let _ = input;
        ScreenAction::Ignored
    }

    fn handle_phase(&mut self, phase: Phase) -> ScreenAction {
        let _ = phase;
        ScreenAction::Ignored
    }

    /// Inputs an autoplay session types on this screen, in order
    fn autoplay_inputs(&self) -> Vec<Input> {
        vec![Input::Action]
    }

    fn view(&self) -> Vec<String>;

    fn hint(&self) -> &'static str {
        "⏎ continue"
    }
}

/// Placeholder for an actor with no screen family.
#[derive(Debug, Clone)]
pub struct UnknownRole {
    step_id: Option<u32>,
}

impl ScreenModel for UnknownRole {
    fn title(&self) -> String {
        "Unknown Role Screen".to_string()
    }

    fn autoplay_inputs(&self) -> Vec<Input> {
        // Nothing can move this screen forward
        vec![Input::Quit]
    }

    fn view(&self) -> Vec<String> {
        let mut lines = vec!["❓ Unknown Role Screen".to_string()];
        if let Some(id) = self.step_id {
            lines.push(format!("   No screen is registered for step {id}."));
        }
        lines
    }

    fn hint(&self) -> &'static str {
        "r restart · q quit"
    }
}

/// The screen currently mounted by the walkthrough.
#[derive(Debug)]
pub enum Screen {
    Landing(Landing),
    Nomination(NominationForm),
    Dashboard(PmDashboard),
    Negotiation(NegotiationScreen),
    Payment(PaymentScreen),
    GoodsReceipt(GoodsReceiptScreen),
    Terminal(TerminalLog),
    Summary(ProjectSummary),
    Unknown(UnknownRole),
}

impl Screen {
    pub fn landing() -> Self {
        Screen::Landing(Landing)
    }

    /// Build fresh ephemeral state for `kind`.
    pub fn mount(kind: ScreenKind, step: Option<&'static Step>) -> Self {
        match (kind, step) {
            (ScreenKind::Summary, _) => Screen::Summary(ProjectSummary),
            (ScreenKind::Nomination, Some(step)) => Screen::Nomination(NominationForm::new(step)),
            (ScreenKind::PmDashboard, Some(step)) => Screen::Dashboard(PmDashboard::new(step)),
            (ScreenKind::Negotiation, Some(step)) => Screen::Negotiation(NegotiationScreen::new(step)),
            (ScreenKind::Payment, Some(step)) => Screen::Payment(PaymentScreen::new(step)),
            (ScreenKind::GoodsReceipt, Some(step)) => Screen::GoodsReceipt(GoodsReceiptScreen::new(step)),
            (ScreenKind::TerminalLog, Some(step)) => Screen::Terminal(TerminalLog::new(step)),
            (ScreenKind::Unknown, step) => Screen::Unknown(UnknownRole {
                step_id: step.map(|s| s.id),
            }),
            (kind, None) => {
                tracing::warn!(screen = %kind, "Screen needs a step but none is current");
                Screen::Unknown(UnknownRole { step_id: None })
            }
        }
    }

    /// Routed screen family; `None` for the landing screen.
    pub fn kind(&self) -> Option<ScreenKind> {
        match self {
            Screen::Landing(_) => None,
            Screen::Nomination(_) => Some(ScreenKind::Nomination),
            Screen::Dashboard(_) => Some(ScreenKind::PmDashboard),
            Screen::Negotiation(_) => Some(ScreenKind::Negotiation),
            Screen::Payment(_) => Some(ScreenKind::Payment),
            Screen::GoodsReceipt(_) => Some(ScreenKind::GoodsReceipt),
            Screen::Terminal(_) => Some(ScreenKind::TerminalLog),
            Screen::Summary(_) => Some(ScreenKind::Summary),
            Screen::Unknown(_) => Some(ScreenKind::Unknown),
        }
    }

    pub fn model(&self) -> &dyn ScreenModel {
        match self {
            Screen::Landing(s) => s,
            Screen::Nomination(s) => s,
            Screen::Dashboard(s) => s,
            Screen::Negotiation(s) => s,
            Screen::Payment(s) => s,
            Screen::GoodsReceipt(s) => s,
            Screen::Terminal(s) => s,
            Screen::Summary(s) => s,
            Screen::Unknown(s) => s,
        }
    }

    pub fn model_mut(&mut self) -> &mut dyn ScreenModel {
        match self {
            Screen::Landing(s) => s,
            Screen::Nomination(s) => s,
            Screen::Dashboard(s) => s,
            Screen::Negotiation(s) => s,
            Screen::Payment(s) => s,
            Screen::GoodsReceipt(s) => s,
            Screen::Terminal(s) => s,
            Screen::Summary(s) => s,
            Screen::Unknown(s) => s,
        }
    }
}
