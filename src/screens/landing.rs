use super::{ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::{fixtures, step_count};

/// Shown until the walkthrough is started.
#[derive(Debug, Clone, Copy, Default)]
pub struct Landing;

impl ScreenModel for Landing {
    fn title(&self) -> String {
        "FTG Commercial Lifecycle".to_string()
    }

    fn handle_input(&mut self, input: Input) -> ScreenAction {
        match input {
            Input::Action => ScreenAction::Start,
            _ => ScreenAction::Ignored,
        }
    }

    fn view(&self) -> Vec<String> {
        vec![
            "FTG PROCESS VISUALIZER".to_string(),
            String::new(),
            "🏭 FTG Commercial Lifecycle".to_string(),
            format!("   {}", fixtures::PROJECT_NAME),
            format!(
                "   Nomination → Sourcing → PR → PO → Payments → Goods Receipt → Closure ({} steps)",
                step_count()
            ),
            String::new(),
            "▶ Start Interactive Demo".to_string(),
        ]
    }

    fn hint(&self) -> &'static str {
        "⏎ start · q quit"
    }
}
