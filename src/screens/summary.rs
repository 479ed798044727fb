use super::{ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::{fixtures, steps};

/// Closure screen reached once every step has been walked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectSummary;

impl ScreenModel for ProjectSummary {
    fn title(&self) -> String {
        "Procurement Complete".to_string()
    }

    fn handle_input(&mut self, input: Input) -> ScreenAction {
        match input {
            Input::Action => ScreenAction::Restart,
            _ => ScreenAction::Ignored,
        }
    }

    fn autoplay_inputs(&self) -> Vec<Input> {
        // An unattended session ends here instead of looping
        vec![Input::Quit]
    }

    fn view(&self) -> Vec<String> {
        let mut lines = vec![
            "✅ Project MnM Complete!".to_string(),
            "   End-to-end procurement workflow executed successfully".to_string(),
            String::new(),
            format!("   {:<18} {}", "Total PO Value", fixtures::TOTAL_VALUE),
            format!("   {:<18} {}", "Vendor", fixtures::VENDOR),
            format!("   {:<18} {}", "Line Items", fixtures::LINE_ITEMS.len()),
            format!("   {:<18} {}", "Savings", fixtures::NEGOTIATED_SAVINGS),
            String::new(),
            "   Workflow Completed".to_string(),
        ];
        lines.extend(steps().iter().map(|step| format!("   ✓ {}", step.title)));
        lines.push("   ✓ PO Closure".to_string());
        lines.push(String::new());
        lines.push("[ Restart Demo ]".to_string());
        lines
    }

    fn hint(&self) -> &'static str {
        "⏎ restart · q quit"
    }
}
