use super::{ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::{fixtures, Step};

/// BD / Customer form screens. One layout per step id, all advancing on submit.
#[derive(Debug, Clone)]
pub struct NominationForm {
    step: &'static Step,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormLayout {
    Nomination,
    Financials,
    PurchaseNomination,
}

impl NominationForm {
    pub fn new(step: &'static Step) -> Self {
        Self { step }
    }

    fn layout(&self) -> FormLayout {
        match self.step.id {
            2 => FormLayout::Financials,
            3 => FormLayout::PurchaseNomination,
            _ => FormLayout::Nomination,
        }
    }

    fn button(&self) -> &'static str {
        match self.layout() {
            FormLayout::Nomination => "Submit Nomination",
            FormLayout::Financials => "Confirm Financials",
            FormLayout::PurchaseNomination => "Nominate Final Costs",
        }
    }

    fn field(label: &str, value: &str) -> String {
        format!("   {label:<28} {value}")
    }
}

impl ScreenModel for NominationForm {
    fn title(&self) -> String {
        match self.layout() {
            FormLayout::Nomination => "New Program Nomination".to_string(),
            FormLayout::Financials => "Financials & PO Entry".to_string(),
            FormLayout::PurchaseNomination => "Purchase Nomination".to_string(),
        }
    }

    fn handle_input(&mut self, input: Input) -> ScreenAction {
        match input {
            Input::Action => {
                tracing::info!(step.id = self.step.id, button = self.button(), "Form submitted");
                ScreenAction::Advance
            }
            _ => ScreenAction::Ignored,
        }
    }

    fn view(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self.layout() {
            FormLayout::Nomination => {
                lines.push("📝 Program details".to_string());
                lines.push(Self::field("OEM Customer", fixtures::CUSTOMER));
                lines.push(Self::field("OEM Project Code", "MNM-IT-2026"));
                lines.push(Self::field("Program Description", fixtures::PROJECT_NAME));
                lines.push(Self::field("Customer PO Number", fixtures::CUSTOMER_PO_NUMBER));
                lines.push(Self::field("Customer PO Value (Revenue)", fixtures::CUSTOMER_PO_VALUE));
                lines.push("   📎 Supporting documents: nomination_letter.pdf".to_string());
            }
            FormLayout::Financials => {
                lines.push("💰 Line items (target cost)".to_string());
                for item in &fixtures::LINE_ITEMS {
                    lines.push(Self::field(item.name, item.target));
                }
                lines.push(Self::field("Estimated Project Cost", fixtures::ESTIMATED_COST));
                lines.push(Self::field("Target Profit Margin", fixtures::TARGET_MARGIN));
                lines.push("   Payment Milestones:".to_string());
                for milestone in &fixtures::MILESTONES {
                    lines.push(format!("     • {milestone}"));
                }
            }
            FormLayout::PurchaseNomination => {
                lines.push(format!(
                    "   {:<36} {:>10} {:>10} {:>10}",
                    "Item", "Target", "Quoted", "Nominated"
                ));
                for item in &fixtures::LINE_ITEMS {
                    lines.push(format!(
                        "   {:<36} {:>10} {:>10} {:>10}",
                        item.name, item.target, item.quoted, item.value
                    ));
                }
                lines.push(Self::field("Vendor", fixtures::VENDOR));
                lines.push(Self::field("Total nominated", fixtures::TOTAL_VALUE));
                lines.push(Self::field("Negotiated savings", fixtures::NEGOTIATED_SAVINGS));
            }
        }
        lines.push(String::new());
        lines.push(format!("[ {} ]", self.button()));
        lines
    }

    fn hint(&self) -> &'static str {
        "⏎ submit"
    }
}
