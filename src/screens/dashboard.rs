use super::{Phase, ScreenAction, ScreenModel};
use crate::input::Input;
use crate::steps::fixtures::{self, PurchasingOrg, PURCHASING_ORGS};
use crate::steps::Step;
use crate::timers::PhaseScript;

const ORG_ERROR_RESET_MS: u64 = 2000;
const CONSOLE_INTERVAL_MS: u64 = 800;
const APPROVED_AT_MS: u64 = 2500;
const ADVANCE_AT_MS: u64 = 4000;
const VENDOR_NOTIFIED_AT_MS: u64 = 3000;
const PO_RELEASED_AT_MS: u64 = 6000;
const PO_ADVANCE_AT_MS: u64 = 8000;

const SENDING_CONSOLE: [&str; 4] = [
    "Sending approval email to Plant Head (L1)...",
    "Email delivered to a.sharma@plant.example.com",
    "Awaiting response from Plant Head...",
    "Plant Head approved PR-MNM-2026-001",
];

const APPROVED_CONSOLE: [&str; 2] = [
    "PR Approved: A. Sharma (Plant Head) confirmed",
    "Handing over to PO release...",
];

const INTERNAL_CONSOLE: [&str; 4] = [
    "Initiating internal approvals...",
    "Notifying CFO",
    "Notifying Plant Head",
    "Awaiting digital signatures...",
];

const VENDOR_CONSOLE: [&str; 2] = [
    "Sending PO to vendor",
    "Vendor received PO, preparing acknowledgement...",
];

const RELEASED_CONSOLE: [&str; 2] = ["PO released", "Vendor acknowledgement pending..."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    /// Clears the rejection from the n-th rejected pick
    OrgErrorCleared(u32),
    Console(usize),
    Approved,
    VendorNotified,
    PoReleased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgStatus {
    Idle,
    Rejected,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalState {
    Draft,
    Sending,
    Approved,
}

/// Sign-off chain of the PO approval board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PoApprovalState {
    Draft,
    Internal,
    Vendor,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    PrRelease,
    PoApproval,
    Review,
}

impl Variant {
    fn for_step(id: u32) -> Self {
        match id {
            4 => Variant::PrRelease,
            6 => Variant::PoApproval,
            _ => Variant::Review,
        }
    }
}

/// Program Manager dashboard, branched by step id.
///
/// Id 4 is the PR release flow and id 6 the PO approval chain (internal
/// sign-off, then vendor dispatch). Every other PM id is a review board.
#[derive(Debug, Clone)]
pub struct PmDashboard {
    step: &'static Step,
    variant: Variant,
    org_status: OrgStatus,
    picked_org: Option<PurchasingOrg>,
    rejections: u32,
    approval: ApprovalState,
    po_approval: PoApprovalState,
    console: Vec<&'static str>,
    show_document: bool,
}

impl PmDashboard {
    pub fn new(step: &'static Step) -> Self {
        Self {
            step,
            variant: Variant::for_step(step.id),
            org_status: OrgStatus::Idle,
            picked_org: None,
            rejections: 0,
            approval: ApprovalState::Draft,
            po_approval: PoApprovalState::Draft,
            console: Vec::new(),
            show_document: false,
        }
    }

    pub fn org_status(&self) -> OrgStatus {
        self.org_status
    }

    pub fn approval(&self) -> ApprovalState {
        self.approval
    }

    pub fn po_approval(&self) -> PoApprovalState {
        self.po_approval
    }

    pub fn console(&self) -> &[&'static str] {
        &self.console
    }

    pub fn document_open(&self) -> bool {
        self.show_document
    }

    fn approval_script() -> PhaseScript<Phase> {
        let mut script = PhaseScript::new();
        for (line, _) in SENDING_CONSOLE.iter().enumerate() {
            script = script.at(line as u64 * CONSOLE_INTERVAL_MS, Phase::Dashboard(DashboardPhase::Console(line)));
        }
        script
            .at(APPROVED_AT_MS, Phase::Dashboard(DashboardPhase::Approved))
            .at(ADVANCE_AT_MS, Phase::Advance)
    }

    fn po_release_script() -> PhaseScript<Phase> {
        PhaseScript::new()
            .at(VENDOR_NOTIFIED_AT_MS, Phase::Dashboard(DashboardPhase::VendorNotified))
            .at(PO_RELEASED_AT_MS, Phase::Dashboard(DashboardPhase::PoReleased))
            .at(PO_ADVANCE_AT_MS, Phase::Advance)
    }

    fn release_po(&mut self) -> ScreenAction {
        if self.po_approval != PoApprovalState::Draft {
            return ScreenAction::Ignored;
        }
        tracing::info!(step.id = self.step.id, po = fixtures::PO_NUMBER, "PO routed for internal approval");
        self.po_approval = PoApprovalState::Internal;
        self.console = INTERNAL_CONSOLE.to_vec();
        ScreenAction::Schedule(Self::po_release_script())
    }

    fn pick_org(&mut self, choice: u8) -> ScreenAction {
        if self.approval != ApprovalState::Draft {
            return ScreenAction::Ignored;
        }
        let picked = usize::from(choice)
            .checked_sub(1)
            .and_then(|index| PURCHASING_ORGS.get(index))
            .copied();
        let Some(org) = picked else {
            return ScreenAction::Notice("No such purchasing org");
        };
        self.picked_org = Some(org);
        if org.allowed_for_plant {
            tracing::info!(step.id = self.step.id, porg = org.code, "Purchasing org accepted");
            self.org_status = OrgStatus::Selected;
            ScreenAction::Redraw
        } else {
            tracing::info!(step.id = self.step.id, porg = org.code, "Purchasing org rejected for plant");
            self.org_status = OrgStatus::Rejected;
            self.rejections += 1;
            ScreenAction::Schedule(PhaseScript::new().at(
                ORG_ERROR_RESET_MS,
                Phase::Dashboard(DashboardPhase::OrgErrorCleared(self.rejections)),
            ))
        }
    }

    fn release(&mut self) -> ScreenAction {
        match (self.approval, self.org_status) {
            (ApprovalState::Draft, OrgStatus::Selected) => {
                tracing::info!(step.id = self.step.id, pr = fixtures::PR_NUMBER, "PR released for approval");
                self.approval = ApprovalState::Sending;
                ScreenAction::Schedule(Self::approval_script())
            }
            (ApprovalState::Draft, _) => ScreenAction::Notice("Select POrg 2000 before releasing the PR"),
            _ => ScreenAction::Ignored,
        }
    }

    fn document_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("   📄 Purchase Requisition {}", fixtures::PR_NUMBER),
            format!("      From: {} · {}", fixtures::CUSTOMER, fixtures::PLANT),
            format!("      Vendor: {} ({})", fixtures::VENDOR, fixtures::VENDOR_GST),
        ];
        for item in &fixtures::LINE_ITEMS {
            lines.push(format!("      {:<36} {:>10}", item.name, item.value));
        }
        lines.push(format!("      {:<36} {:>10}", "Total (Inclusive of Taxes)", fixtures::TOTAL_VALUE));
        lines.push(format!("      Payment Terms: {}", fixtures::PAYMENT_TERMS));
        lines
    }
}

impl ScreenModel for PmDashboard {
    fn title(&self) -> String {
        match (self.variant, self.approval) {
            (Variant::PrRelease, ApprovalState::Draft) => "PR Creation & POrg Check".to_string(),
            (Variant::PrRelease, _) => "PR Approval Workflow".to_string(),
            (Variant::PoApproval, _) if self.po_approval == PoApprovalState::Draft => {
                "PO Approval".to_string()
            }
            (Variant::PoApproval, _) => "PO Release Simulation".to_string(),
            (Variant::Review, _) => format!("{} Review", self.step.title),
        }
    }

    fn handle_input(&mut self, input: Input) -> ScreenAction {
        match (self.variant, input) {
            (_, Input::ToggleDocument) => {
                self.show_document = !self.show_document;
                ScreenAction::Redraw
            }
            (Variant::Review, Input::Action) => ScreenAction::Advance,
            (Variant::PrRelease, Input::PickOrg(choice)) => self.pick_org(choice),
            (Variant::PrRelease, Input::Action) => self.release(),
            (Variant::PoApproval, Input::Action) => self.release_po(),
            _ => ScreenAction::Ignored,
        }
    }

    fn handle_phase(&mut self, phase: Phase) -> ScreenAction {
        let Phase::Dashboard(phase) = phase else {
            return ScreenAction::Ignored;
        };
        match phase {
            DashboardPhase::OrgErrorCleared(rejection)
                if self.org_status == OrgStatus::Rejected && rejection == self.rejections =>
            {
                self.org_status = OrgStatus::Idle;
                self.picked_org = None;
                ScreenAction::Redraw
            }
            DashboardPhase::OrgErrorCleared(_) => ScreenAction::Ignored,
            DashboardPhase::Console(line) if self.approval == ApprovalState::Sending => {
                match SENDING_CONSOLE.get(line) {
                    Some(text) => {
                        self.console.push(text);
                        ScreenAction::Redraw
                    }
                    None => ScreenAction::Ignored,
                }
            }
            DashboardPhase::Console(_) => ScreenAction::Ignored,
            DashboardPhase::Approved => {
                self.approval = ApprovalState::Approved;
                self.console = APPROVED_CONSOLE.to_vec();
                ScreenAction::Redraw
            }
            DashboardPhase::VendorNotified if self.po_approval == PoApprovalState::Internal => {
                self.po_approval = PoApprovalState::Vendor;
                self.console = VENDOR_CONSOLE.to_vec();
                ScreenAction::Redraw
            }
            DashboardPhase::PoReleased if self.po_approval == PoApprovalState::Vendor => {
                tracing::info!(step.id = self.step.id, po = fixtures::PO_NUMBER, "PO released to vendor");
                self.po_approval = PoApprovalState::Released;
                self.console = RELEASED_CONSOLE.to_vec();
                ScreenAction::Redraw
            }
            DashboardPhase::VendorNotified | DashboardPhase::PoReleased => ScreenAction::Ignored,
        }
    }

    fn autoplay_inputs(&self) -> Vec<Input> {
        match self.variant {
            Variant::PrRelease => {
                let allowed = PURCHASING_ORGS
                    .iter()
                    .position(|org| org.allowed_for_plant)
                    .unwrap_or(0);
                vec![Input::PickOrg(allowed as u8 + 1), Input::Action]
            }
            Variant::PoApproval | Variant::Review => vec![Input::Action],
        }
    }

    fn view(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self.variant {
            Variant::Review => {
                lines.push(format!("📊 {}", self.step.description));
                for detail in self.step.details {
                    lines.push(format!("   ☐ {detail}"));
                }
                lines.push(String::new());
                lines.push("[ Proceed ]".to_string());
            }
            Variant::PoApproval if self.po_approval == PoApprovalState::Draft => {
                lines.push(format!("📑 Purchase Order Review ({})", fixtures::PO_NUMBER));
                lines.push(format!("   Vendor: {} ({})", fixtures::VENDOR, fixtures::VENDOR_GST));
                lines.push(format!("   Payment Terms: {}", fixtures::PAYMENT_TERMS));
                lines.push(format!("   {:<36} {:>10}", "Total", fixtures::TOTAL_VALUE));
                lines.push(String::new());
                lines.push("[ Release Purchase Order ]".to_string());
            }
            Variant::PoApproval => {
                let status = match self.po_approval {
                    PoApprovalState::Internal => {
                        format!("🔏 Routing for internal approval: {}, {}", fixtures::CFO_EMAIL, fixtures::APPROVER_EMAIL)
                    }
                    PoApprovalState::Vendor => format!("📤 Sending to vendor: {}", fixtures::VENDOR_EMAIL),
                    _ => format!("✅ {} released to {}", fixtures::PO_NUMBER, fixtures::VENDOR),
                };
                lines.push(status);
                lines.push(String::new());
                lines.push("   PO Release Console".to_string());
                for line in &self.console {
                    lines.push(format!("   > {line}"));
                }
            }
            Variant::PrRelease if self.approval == ApprovalState::Draft => {
                lines.push(format!("1. Line items ({})", fixtures::PR_NUMBER));
                for item in &fixtures::LINE_ITEMS {
                    lines.push(format!("   {:<36} {:>10}", item.name, item.value));
                }
                lines.push(format!("   {:<36} {:>10}", "Total", fixtures::TOTAL_VALUE));
                lines.push(String::new());
                lines.push("2. Purchasing organisation".to_string());
                for (i, org) in PURCHASING_ORGS.iter().enumerate() {
                    let marker = match (self.picked_org, self.org_status) {
                        (Some(picked), OrgStatus::Rejected) if picked == *org => "✗",
                        (Some(picked), OrgStatus::Selected) if picked == *org => "✓",
                        _ => " ",
                    };
                    lines.push(format!("   [{}] {} POrg {} - {}", i + 1, marker, org.code, org.label));
                }
                match self.org_status {
                    OrgStatus::Rejected => {
                        lines.push("   ⚠️  POrg not allowed for this plant. Pick POrg 2000.".to_string())
                    }
                    OrgStatus::Selected => lines.push("   ✅ POrg 2000 validated for Chakan plant".to_string()),
                    OrgStatus::Idle => {}
                }
                lines.push(String::new());
                let button = if self.org_status == OrgStatus::Selected {
                    "[ 3. Release PR for Approval ]"
                } else {
                    "[ 3. Release PR for Approval ] (locked)"
                };
                lines.push(button.to_string());
            }
            Variant::PrRelease => {
                match self.approval {
                    ApprovalState::Approved => {
                        lines.push(format!("✅ PR Approved by {}", fixtures::APPROVER));
                    }
                    _ => lines.push(format!("📤 Routing {} to {}...", fixtures::PR_NUMBER, fixtures::APPROVER_EMAIL)),
                }
                lines.push(String::new());
                lines.push("   PR Release Console".to_string());
                for line in &self.console {
                    lines.push(format!("   > {line}"));
                }
                if self.approval == ApprovalState::Sending {
                    lines.push("   > _".to_string());
                }
            }
        }
        if self.show_document {
            lines.push(String::new());
            lines.extend(self.document_lines());
        }
        lines
    }

    fn hint(&self) -> &'static str {
        match (self.variant, self.approval) {
            (Variant::PrRelease, ApprovalState::Draft) => "1/2 pick POrg · ⏎ release · d document",
            (Variant::PrRelease, _) => "approval in progress · d document",
            (Variant::PoApproval, _) if self.po_approval == PoApprovalState::Draft => "⏎ release PO · d document",
            (Variant::PoApproval, _) => "release in progress · d document",
            (Variant::Review, _) => "⏎ proceed · d document",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{step_by_id, Actor, StepKind};

    fn pr_screen() -> PmDashboard {
        PmDashboard::new(step_by_id(4).unwrap())
    }

    #[test]
    fn test_release_is_locked_until_valid_org() {
        let mut screen = pr_screen();
        assert!(matches!(screen.handle_input(Input::Action), ScreenAction::Notice(_)));
        assert_eq!(screen.approval(), ApprovalState::Draft);
    }

    #[test]
    fn test_invalid_org_schedules_reset() {
        let mut screen = pr_screen();
        let ScreenAction::Schedule(script) = screen.handle_input(Input::PickOrg(1)) else {
            panic!("expected a reset script");
        };
        assert_eq!(screen.org_status(), OrgStatus::Rejected);
        assert_eq!(script.total().as_millis(), 2000);
        assert_eq!(
            script.cues().last().map(|c| c.phase),
            Some(Phase::Dashboard(DashboardPhase::OrgErrorCleared(1)))
        );

        assert_eq!(
            screen.handle_phase(Phase::Dashboard(DashboardPhase::OrgErrorCleared(1))),
            ScreenAction::Redraw
        );
        assert_eq!(screen.org_status(), OrgStatus::Idle);
    }

    #[test]
    fn test_late_error_reset_does_not_clear_a_valid_pick() {
        let mut screen = pr_screen();
        screen.handle_input(Input::PickOrg(1));
        screen.handle_input(Input::PickOrg(2));
        assert_eq!(
            screen.handle_phase(Phase::Dashboard(DashboardPhase::OrgErrorCleared(1))),
            ScreenAction::Ignored
        );
        assert_eq!(screen.org_status(), OrgStatus::Selected);
    }

    #[test]
    fn test_repeated_rejection_outlives_the_earlier_reset() {
        let mut screen = pr_screen();
        screen.handle_input(Input::PickOrg(1));
        screen.handle_input(Input::PickOrg(1));

        // Reset from the first pick lands while the second rejection is showing
        assert_eq!(
            screen.handle_phase(Phase::Dashboard(DashboardPhase::OrgErrorCleared(1))),
            ScreenAction::Ignored
        );
        assert_eq!(screen.org_status(), OrgStatus::Rejected);

        assert_eq!(
            screen.handle_phase(Phase::Dashboard(DashboardPhase::OrgErrorCleared(2))),
            ScreenAction::Redraw
        );
        assert_eq!(screen.org_status(), OrgStatus::Idle);
    }

    #[test]
    fn test_unknown_org_choice() {
        let mut screen = pr_screen();
        assert!(matches!(screen.handle_input(Input::PickOrg(9)), ScreenAction::Notice(_)));
    }

    #[test]
    fn test_release_flow_script() {
        let mut screen = pr_screen();
        assert_eq!(screen.handle_input(Input::PickOrg(2)), ScreenAction::Redraw);
        let ScreenAction::Schedule(script) = screen.handle_input(Input::Action) else {
            panic!("expected approval script");
        };
        assert_eq!(screen.approval(), ApprovalState::Sending);
        let offsets: Vec<u128> = script.cues().iter().map(|c| c.at.as_millis()).collect();
        assert_eq!(offsets, vec![0, 800, 1600, 2400, 2500, 4000]);
        assert_eq!(script.cues().last().map(|c| c.phase), Some(Phase::Advance));

        // Second release is ignored while the workflow runs
        assert_eq!(screen.handle_input(Input::Action), ScreenAction::Ignored);
        // Org can no longer be changed
        assert_eq!(screen.handle_input(Input::PickOrg(1)), ScreenAction::Ignored);
    }

    #[test]
    fn test_console_lines_accumulate_then_switch_on_approval() {
        let mut screen = pr_screen();
        screen.handle_input(Input::PickOrg(2));
        screen.handle_input(Input::Action);
        for line in 0..SENDING_CONSOLE.len() {
            screen.handle_phase(Phase::Dashboard(DashboardPhase::Console(line)));
        }
        assert_eq!(screen.console().len(), 4);
        screen.handle_phase(Phase::Dashboard(DashboardPhase::Approved));
        assert_eq!(screen.approval(), ApprovalState::Approved);
        assert_eq!(screen.console(), &APPROVED_CONSOLE[..]);
        assert_eq!(screen.title(), "PR Approval Workflow");
    }

    #[test]
    fn test_document_toggle() {
        let mut screen = pr_screen();
        assert!(!screen.document_open());
        screen.handle_input(Input::ToggleDocument);
        assert!(screen.document_open());
        assert!(screen.view().join("\n").contains("Payment Terms"));
        screen.handle_input(Input::ToggleDocument);
        assert!(!screen.document_open());
    }

    #[test]
    fn test_autoplay_picks_allowed_org_then_releases() {
        assert_eq!(pr_screen().autoplay_inputs(), vec![Input::PickOrg(2), Input::Action]);
    }

    static PO_APPROVAL: Step = Step {
        id: 6,
        title: "PO Approval",
        actor: Actor::Pm,
        description: "Route the purchase order for sign-off.",
        kind: StepKind::Manual,
        details: &[],
        blueprint: None,
    };

    #[test]
    fn test_po_approval_runs_internal_then_vendor_chain() {
        let mut screen = PmDashboard::new(&PO_APPROVAL);
        assert_eq!(screen.title(), "PO Approval");
        assert!(screen.view().join("\n").contains("Release Purchase Order"));

        let ScreenAction::Schedule(script) = screen.handle_input(Input::Action) else {
            panic!("expected PO release script");
        };
        let offsets: Vec<u128> = script.cues().iter().map(|c| c.at.as_millis()).collect();
        assert_eq!(offsets, vec![3000, 6000, 8000]);
        assert_eq!(screen.po_approval(), PoApprovalState::Internal);
        assert_eq!(screen.console(), &INTERNAL_CONSOLE[..]);
        assert_eq!(screen.handle_input(Input::Action), ScreenAction::Ignored);

        // Out of order phases are ignored
        assert_eq!(
            screen.handle_phase(Phase::Dashboard(DashboardPhase::PoReleased)),
            ScreenAction::Ignored
        );
        screen.handle_phase(Phase::Dashboard(DashboardPhase::VendorNotified));
        assert_eq!(screen.po_approval(), PoApprovalState::Vendor);
        assert!(screen.view().join("\n").contains(fixtures::VENDOR_EMAIL));

        screen.handle_phase(Phase::Dashboard(DashboardPhase::PoReleased));
        assert_eq!(screen.po_approval(), PoApprovalState::Released);
        assert_eq!(screen.console(), &RELEASED_CONSOLE[..]);
        assert_eq!(screen.title(), "PO Release Simulation");
    }

    #[test]
    fn test_po_approval_autoplay_releases() {
        assert_eq!(PmDashboard::new(&PO_APPROVAL).autoplay_inputs(), vec![Input::Action]);
    }

    #[test]
    fn test_other_pm_steps_render_review_board() {
        static MILESTONE: Step = Step {
            id: 11,
            title: "Milestone Update",
            actor: Actor::Pm,
            description: "Verify the tooling milestone.",
            kind: StepKind::Manual,
            details: &["T0 Inspection Report Uploaded"],
            blueprint: None,
        };
        let mut screen = PmDashboard::new(&MILESTONE);
        assert_eq!(screen.title(), "Milestone Update Review");
        assert!(screen.view().join("\n").contains("T0 Inspection Report"));
        assert_eq!(screen.handle_input(Input::Action), ScreenAction::Advance);
    }
}
