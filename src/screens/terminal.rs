use super::{Phase, ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::Step;
use crate::timers::PhaseScript;
use chrono::Local;

/// Marker that ends every console script.
const DONE_MARKER: &str = "[DONE]";
const ADVANCE_AFTER_DONE_MS: u64 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalPhase {
    /// Reveal line `n` of the script
    Line(usize),
    Complete,
}

/// (offset ms, console line)
type ConsoleScript = &'static [(u64, &'static str)];

const DOWN_PAYMENT: ConsoleScript = &[
    (500, "[ERP] Scanning PO for capital goods (mould tooling)..."),
    (1500, "[MONITOR] Executing down payment monitor..."),
    (2500, "[FOUND] Tooling advance: 20% required for IP Carrier tool."),
    (3500, "[POST] Auto-posting tooling advance request"),
    (4500, "[DONE] Advance payment request created."),
];

const PAYMENT_TERMS: ConsoleScript = &[
    (500, "[ERP] Configuring payment terms for tooling amortization..."),
    (1500, "[TERMS] Deriving due date from 20/80 terms..."),
    (2500, "[CALC] Baseline date + 45 days"),
    (3500, "[UPDATE] Cash management forecast updated."),
    (4500, "[DONE] Sequence complete."),
];

const SERVICE_ENTRY: ConsoleScript = &[
    (500, "[ERP] Monitoring service entry sheet status..."),
    (1500, "[CHECK] Validating transport & logistics charges..."),
    (2500, "[MATCH] 3-way match: SES vs PO vs invoice"),
    (3500, "[AUTO] Posting logistics invoice..."),
    (4500, "[DONE] Invoice posted."),
];

const PO_CREATION: ConsoleScript = &[
    (500, "[ERP] Initializing mass conversion run..."),
    (1200, "[CHECK] Validating PR release strategy status..."),
    (2000, "[SOURCE] Source list: Tooling Solutions Ltd (preferred vendor)"),
    (2800, "[NEGOTIATION] Applying negotiated tooling rates..."),
    (3500, "[SUCCESS] PO created: PO-MNM-2026-001. Value: ₹ 4.35 Cr (Savings: ₹ 16 L)"),
    (4200, "[NOTIFY] Triggering 'PO Issued' email to vendor..."),
    (5000, "[DONE] Process completed successfully."),
];

fn console_script(step_id: u32) -> (&'static str, ConsoleScript) {
    match step_id {
        9 => ("Service Entry Automation", SERVICE_ENTRY),
        10 => ("Capital Down Payments", DOWN_PAYMENT),
        11 => ("Payment Terms", PAYMENT_TERMS),
        _ => ("Automated PO Creation", PO_CREATION),
    }
}

/// Generic automation console for System steps without a dedicated screen.
#[derive(Debug, Clone)]
pub struct TerminalLog {
    step: &'static Step,
    script: ConsoleScript,
    heading: &'static str,
    revealed: Vec<(String, &'static str)>,
    complete: bool,
}

impl TerminalLog {
    pub fn new(step: &'static Step) -> Self {
        let (heading, script) = console_script(step.id);
        Self {
            step,
            script,
            heading,
            revealed: Vec::new(),
            complete: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.revealed.iter().map(|(_, line)| *line)
    }

    fn reveal(&mut self, index: usize) {
        let Some(&(_, line)) = self.script.get(index) else {
            return;
        };
        if self.revealed.iter().any(|(_, shown)| *shown == line) {
            return;
        }
        let stamp = Local::now().format("%H:%M:%S").to_string();
        self.revealed.push((stamp, line));
    }
}

impl ScreenModel for TerminalLog {
    fn title(&self) -> String {
        self.heading.to_string()
    }

    fn mount_script(&self) -> Option<PhaseScript<Phase>> {
        let mut script = PhaseScript::new();
        for (index, &(offset, line)) in self.script.iter().enumerate() {
            script = script.at(offset, Phase::Terminal(TerminalPhase::Line(index)));
            if line.starts_with(DONE_MARKER) {
                script = script.at(offset, Phase::Terminal(TerminalPhase::Complete));
                break;
            }
        }
        Some(script.then_after(ADVANCE_AFTER_DONE_MS, Phase::Advance))
    }

    fn handle_phase(&mut self, phase: Phase) -> ScreenAction {
        match phase {
            Phase::Terminal(TerminalPhase::Line(index)) => {
                self.reveal(index);
                ScreenAction::Redraw
            }
            Phase::Terminal(TerminalPhase::Complete) => {
                tracing::info!(step.id = self.step.id, lines = self.revealed.len(), "Console sequence complete");
                self.complete = true;
                ScreenAction::Redraw
            }
            _ => ScreenAction::Ignored,
        }
    }

    fn autoplay_inputs(&self) -> Vec<Input> {
        Vec::new()
    }

    fn view(&self) -> Vec<String> {
        let mut lines = vec![format!(">_ System Console Output · {}", self.step.title)];
        for (stamp, line) in &self.revealed {
            lines.push(format!("   {stamp}  {line}"));
        }
        if self.complete {
            lines.push("   ✔ Confirmed · continuing".to_string());
        } else {
            lines.push("   █ Processing...".to_string());
        }
        lines
    }

    fn hint(&self) -> &'static str {
        "automated step · please wait"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{Actor, StepKind};

    static DOWN_PAYMENT_STEP: Step = Step {
        id: 10,
        title: "Capital Down Payment",
        actor: Actor::System,
        description: "Tooling advance request.",
        kind: StepKind::Automated,
        details: &[],
        blueprint: None,
    };

    static UNSCRIPTED_STEP: Step = Step {
        id: 42,
        title: "Automation Core",
        actor: Actor::System,
        description: "Fallback console.",
        kind: StepKind::Automated,
        details: &[],
        blueprint: None,
    };

    #[test]
    fn test_script_is_keyed_by_step_id() {
        assert_eq!(TerminalLog::new(&DOWN_PAYMENT_STEP).title(), "Capital Down Payments");
        assert_eq!(TerminalLog::new(&UNSCRIPTED_STEP).title(), "Automated PO Creation");
    }

    #[test]
    fn test_advance_follows_done_line() {
        let script = TerminalLog::new(&UNSCRIPTED_STEP).mount_script().unwrap();
        let cues = script.cues();
        let complete = cues
            .iter()
            .find(|cue| cue.phase == Phase::Terminal(TerminalPhase::Complete))
            .unwrap();
        assert_eq!(complete.at.as_millis(), 5000);
        assert_eq!(cues.last().unwrap().phase, Phase::Advance);
        assert_eq!(script.total().as_millis(), 5900);
    }

    #[test]
    fn test_lines_revealed_once_in_order() {
        let mut log = TerminalLog::new(&DOWN_PAYMENT_STEP);
        log.handle_phase(Phase::Terminal(TerminalPhase::Line(0)));
        log.handle_phase(Phase::Terminal(TerminalPhase::Line(1)));
        log.handle_phase(Phase::Terminal(TerminalPhase::Line(1)));
        log.handle_phase(Phase::Terminal(TerminalPhase::Line(99)));
        let shown: Vec<&str> = log.revealed().collect();
        assert_eq!(shown.len(), 2);
        assert!(shown[0].starts_with("[ERP]"));
        assert!(log.view().join("\n").contains("Processing"));

        log.handle_phase(Phase::Terminal(TerminalPhase::Complete));
        assert!(log.is_complete());
        assert!(!log.view().join("\n").contains("Processing"));
    }
}
