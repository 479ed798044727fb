//! Step → screen dispatch.
//!
//! Primary dispatch is on [`Actor`]; System and PM steps are refined by id.
//! Running past the end of the registry always lands on the summary.

use crate::steps::{Actor, Step};
use serde::Serialize;
use std::fmt;

/// The screen family selected for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScreenKind {
    Nomination,
    PmDashboard,
    Negotiation,
    Payment,
    GoodsReceipt,
    TerminalLog,
    Summary,
    Unknown,
}

impl ScreenKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::Nomination => "NominationForm",
            ScreenKind::PmDashboard => "PmDashboard",
            ScreenKind::Negotiation => "NegotiationScreen",
            ScreenKind::Payment => "PaymentScreen",
            ScreenKind::GoodsReceipt => "GoodsReceiptScreen",
            ScreenKind::TerminalLog => "TerminalLog",
            ScreenKind::Summary => "ProjectSummary",
            ScreenKind::Unknown => "UnknownRoleScreen",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the screen for the current step. `None` means the workflow is complete.
pub fn route(step: Option<&Step>) -> ScreenKind {
    match step {
        None => ScreenKind::Summary,
        Some(step) => route_step(step.actor, step.id),
    }
}

fn route_step(actor: Actor, id: u32) -> ScreenKind {
    match actor {
        Actor::Bd | Actor::Customer => ScreenKind::Nomination,
        Actor::Pm => ScreenKind::PmDashboard,
        Actor::System => match id {
            5 => ScreenKind::Negotiation,
            7 => ScreenKind::GoodsReceipt,
            6 | 8 => ScreenKind::Payment,
            _ => ScreenKind::TerminalLog,
        },
        Actor::Vendor => ScreenKind::Unknown,
    }
}
