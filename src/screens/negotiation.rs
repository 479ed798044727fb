use super::{timeline, Phase, ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::{fixtures, Step};
use crate::timers::PhaseScript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NegotiationPhase {
    EmailSent,
    PlantHeadApproved,
    PoReleased,
    Approved,
}

/// Automated PO release: the approval chain runs as soon as the screen mounts.
#[derive(Debug, Clone)]
pub struct NegotiationScreen {
    step: &'static Step,
    reached: Option<NegotiationPhase>,
}

impl NegotiationScreen {
    pub fn new(step: &'static Step) -> Self {
        Self { step, reached: None }
    }

    pub fn reached(&self) -> Option<NegotiationPhase> {
        self.reached
    }

    fn check(&self, phase: NegotiationPhase) -> &'static str {
        match self.reached {
            Some(reached) if reached >= phase => "✓",
            _ => "·",
        }
    }
}

impl ScreenModel for NegotiationScreen {
    fn title(&self) -> String {
        self.step.title.to_string()
    }

    fn mount_script(&self) -> Option<PhaseScript<Phase>> {
        Some(
            PhaseScript::starting_with(Phase::Negotiation(NegotiationPhase::EmailSent))
                .at(900, Phase::Negotiation(NegotiationPhase::PlantHeadApproved))
                .at(2200, Phase::Negotiation(NegotiationPhase::PoReleased))
                .at(3000, Phase::Negotiation(NegotiationPhase::Approved))
                .at(3900, Phase::Advance),
        )
    }

    fn handle_phase(&mut self, phase: Phase) -> ScreenAction {
        match phase {
            Phase::Negotiation(phase) => {
                tracing::debug!(step.id = self.step.id, phase = ?phase, "PO release phase");
                self.reached = Some(phase);
                ScreenAction::Redraw
            }
            _ => ScreenAction::Ignored,
        }
    }

    fn autoplay_inputs(&self) -> Vec<Input> {
        Vec::new()
    }

    fn view(&self) -> Vec<String> {
        let mut lines = timeline::render(self.step.id);
        lines.push(String::new());
        lines.push(format!(
            "PO Summary   value {}   items {}   vendor {}",
            fixtures::TOTAL_VALUE,
            fixtures::LINE_ITEMS.len(),
            fixtures::VENDOR
        ));
        for item in &fixtures::LINE_ITEMS {
            lines.push(format!("   {:<36} {:>10}", item.name, item.value));
        }
        lines.push(format!("   {:<36} {:>10}", "Total", fixtures::TOTAL_VALUE));
        lines.push(String::new());

        if self.reached.is_some() {
            lines.push(format!("✅ PO Submitted: {} sent to approver", fixtures::PO_NUMBER));
        }
        lines.push(format!("   {} Email sent to Plant Head", self.check(NegotiationPhase::EmailSent)));
        lines.push(format!("   {} Plant Head approved", self.check(NegotiationPhase::PlantHeadApproved)));
        lines.push(format!("   {} PO Approved & Released", self.check(NegotiationPhase::PoReleased)));
        let status = if self.reached == Some(NegotiationPhase::Approved) {
            "Proceeding to Stage Payment..."
        } else {
            "Processing approval..."
        };
        lines.push(format!("   {status}"));
        lines
    }

    fn hint(&self) -> &'static str {
        "automated step · please wait"
    }
}
