//! The fixed catalog of workflow steps.
//!
//! Order in [`STEPS`] is workflow order. Ids start at 1 and are dense.

use super::types::{Actor, Blueprint, Step, StepKind};

pub static STEPS: [Step; 8] = [
    Step {
        id: 1,
        title: "Nomination",
        actor: Actor::Customer,
        description: "Customer nominates project with cost description.",
        kind: StepKind::Manual,
        details: &["Customer: OEM Automotive", "Project Nomination", "Enter Cost Description"],
        blueprint: Some(Blueprint {
            id: "NOM-01",
            title: "Customer Nomination",
            desc: "Initial entry point for customer project nomination.",
        }),
    },
    Step {
        id: 2,
        title: "Sales Master Data - Target",
        actor: Actor::Bd,
        description: "Enter line items with target cost from sales master data.",
        kind: StepKind::Manual,
        details: &["Enter Line Items", "Set Target Costs", "Define Budget"],
        blueprint: Some(Blueprint {
            id: "SMD-01",
            title: "Sales Master Data",
            desc: "Define target costs for each line item from sales master data.",
        }),
    },
    Step {
        id: 3,
        title: "Purchase Nomination",
        actor: Actor::Bd,
        description: "Purchase team reviews negotiated quotes and nominates final costs.",
        kind: StepKind::Manual,
        details: &["Review Quotes", "Validate Pricing", "Nominate Final Costs"],
        blueprint: Some(Blueprint {
            id: "PN-01",
            title: "Purchase Nomination",
            desc: "Purchase team reviews and validates the nominated costs after negotiation.",
        }),
    },
    Step {
        id: 4,
        title: "PR Release",
        actor: Actor::Pm,
        description: "Program Manager reviews status and releases Purchase Requisition.",
        kind: StepKind::Manual,
        details: &["Review PR Status", "Validate Costs", "Release PR"],
        blueprint: Some(Blueprint {
            id: "PR-REL-01",
            title: "PR Release",
            desc: "Formal release of purchase requisition.",
        }),
    },
    Step {
        id: 5,
        title: "PO Release",
        actor: Actor::System,
        description: "System processes Purchase Order release with vendor allocation.",
        kind: StepKind::Automated,
        details: &["Convert PR to PO", "Vendor Allocation", "Send PO to Vendor"],
        blueprint: Some(Blueprint {
            id: "PO-REL-01",
            title: "PO Release",
            desc: "Automated conversion and release of Purchase Order to selected vendor.",
        }),
    },
    Step {
        id: 6,
        title: "Stage Payment",
        actor: Actor::System,
        description: "Process stage payment (Advance 20%) against Purchase Order.",
        kind: StepKind::Automated,
        details: &["Process Advance Payment (20%)", "Amount: ₹ 87 L", "Update Payment Status"],
        blueprint: Some(Blueprint {
            id: "PAY-STG-01",
            title: "Stage Payment",
            desc: "Initial advance payment to vendor for project kickoff.",
        }),
    },
    Step {
        id: 7,
        title: "GRN",
        actor: Actor::System,
        description: "Record Goods Receipt Note for delivered items.",
        kind: StepKind::Automated,
        details: &["Verify Delivery", "Create GRN", "Update Inventory"],
        blueprint: Some(Blueprint {
            id: "GRN-01",
            title: "Goods Receipt",
            desc: "Recording physical receipt of goods against Purchase Order.",
        }),
    },
    Step {
        id: 8,
        title: "Final Payment",
        actor: Actor::System,
        description: "Process final settlement payment (80%) after goods receipt.",
        kind: StepKind::Automated,
        details: &["Process Final Payment (80%)", "Amount: ₹ 3.48 Cr", "Close PO"],
        blueprint: Some(Blueprint {
            id: "PAY-FIN-01",
            title: "Final Payment",
            desc: "Final settlement against verified goods receipt.",
        }),
    },
];

pub fn steps() -> &'static [Step] {
    &STEPS
}

pub fn step_count() -> usize {
    STEPS.len()
}

/// Step at a zero-based position, `None` past the end of the workflow.
pub fn step_at(index: usize) -> Option<&'static Step> {
    STEPS.get(index)
}

pub fn step_by_id(id: u32) -> Option<&'static Step> {
    STEPS.iter().find(|step| step.id == id)
}

/// Per-step instruction shown in the guide panel
pub fn instruction_for(step: &Step) -> &'static str {
    match step.id {
        1 => "Enter the Project Revenue details received from the OEM.",
        2 => "Define the Budget WBS and Milestones.",
        3 => "Review the negotiated vendor quotes and nominate the final costs.",
        4 => "Select the correct Purchasing Org (POrg 2000) allowed for this Plant, then release the PR.",
        _ if step.actor == Actor::System => "Watch the automation run. No input is required.",
        _ => "Review the action items on the dashboard to proceed.",
    }
}
