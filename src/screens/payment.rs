use super::{timeline, Phase, ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::fixtures::{self, PaymentTranche, FINAL_PAYMENT, STAGE_PAYMENT};
use crate::steps::Step;
use crate::timers::PhaseScript;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPhase {
    Processing,
    Completed,
}

/// Stage (20%) or final (80%) payment run against the PO.
#[derive(Debug, Clone)]
pub struct PaymentScreen {
    step: &'static Step,
    tranche: PaymentTranche,
    phase: Option<PaymentPhase>,
}

/// Bank reference for a payment step. Same step id, same reference.
pub fn transaction_reference(step_id: u32) -> String {
    let mut rng = StdRng::seed_from_u64(0x4d4e_4d00 ^ u64::from(step_id));
    let serial: u64 = rng.random_range(100_000_000..1_000_000_000);
    format!("UTR-ICIC-{serial}")
}

impl PaymentScreen {
    pub fn new(step: &'static Step) -> Self {
        let tranche = if step.id == 6 { STAGE_PAYMENT } else { FINAL_PAYMENT };
        Self {
            step,
            tranche,
            phase: None,
        }
    }

    pub fn phase(&self) -> Option<PaymentPhase> {
        self.phase
    }

    pub fn tranche(&self) -> &PaymentTranche {
        &self.tranche
    }
}

impl ScreenModel for PaymentScreen {
    fn title(&self) -> String {
        self.step.title.to_string()
    }

    fn mount_script(&self) -> Option<PhaseScript<Phase>> {
        Some(
            PhaseScript::starting_with(Phase::Payment(PaymentPhase::Processing))
                .then_after(2000, Phase::Payment(PaymentPhase::Completed))
                .then_after(900, Phase::Advance),
        )
    }

    fn handle_phase(&mut self, phase: Phase) -> ScreenAction {
        match phase {
            Phase::Payment(phase) => {
                if phase == PaymentPhase::Completed {
                    tracing::info!(
                        step.id = self.step.id,
                        amount = self.tranche.amount,
                        reference = %transaction_reference(self.step.id),
                        "Payment posted"
                    );
                }
                self.phase = Some(phase);
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
        lines.push(format!("💳 {}", self.tranche.label));
        lines.push(format!("   {:<12} {}", "Amount", self.tranche.amount));
        lines.push(format!("   {:<12} {}", "Share", self.tranche.share));
        lines.push(format!("   {:<12} {}", "Total PO", fixtures::TOTAL_VALUE));
        lines.push(format!("   {:<12} {}", "Method", fixtures::PAYMENT_METHOD));
        lines.push(format!("   {:<12} {} ({})", "Vendor", fixtures::VENDOR, fixtures::VENDOR_GST));
        lines.push(format!(
            "   {:<12} {} · {} · {}",
            "Bank",
            fixtures::BANK,
            fixtures::BANK_ACCOUNT,
            fixtures::BANK_IFSC
        ));
        lines.push(String::new());
        match self.phase {
            None => lines.push("   Preparing payment run...".to_string()),
            Some(PaymentPhase::Processing) => lines.push("   ⏳ Authorizing payment [██████░░░░]".to_string()),
            Some(PaymentPhase::Completed) => {
                lines.push("   ✅ Payment Successful".to_string());
                lines.push(format!("   Reference: {}", transaction_reference(self.step.id)));
                lines.push(format!("   {}", self.tranche.status_update));
            }
        }
        lines
    }

    fn hint(&self) -> &'static str {
        "automated step · please wait"
    }
}
