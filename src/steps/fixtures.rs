//! Project MnM: Interior Trims (Scope: Cockpit, Door Trims, Floor Console).
//!
//! Every figure shown by the screens comes from here. Values are display
//! strings; nothing is computed from them.

pub const PROJECT_NAME: &str = "Project MnM: Interior Trims";
pub const CUSTOMER: &str = "OEM Automotive";
pub const VENDOR: &str = "Tooling Solutions Ltd";
pub const VENDOR_GST: &str = "GST: 24AABCT1234F1Z2";
pub const PLANT: &str = "Plant: Chakan, Pune";

pub const PR_NUMBER: &str = "PR-MNM-2026-001";
pub const PO_NUMBER: &str = "PO-MNM-2026-001";
pub const GRN_NUMBER: &str = "GRN-MNM-2026-001";
pub const CUSTOMER_PO_NUMBER: &str = "PO-AUTO-2024-9921";

pub const TOTAL_VALUE: &str = "₹ 4.35 Cr";
pub const CUSTOMER_PO_VALUE: &str = "₹ 5,00,00,000.00";
pub const ESTIMATED_COST: &str = "₹ 4,35,00,000.00";
pub const TARGET_MARGIN: &str = "13%";
pub const NEGOTIATED_SAVINGS: &str = "₹ 16 L";
pub const PAYMENT_TERMS: &str = "20% Advance against Tooling, Balance 80% on Delivery.";

pub const BANK: &str = "ICICI Bank";
pub const BANK_ACCOUNT: &str = "A/C: 002305500123";
pub const BANK_IFSC: &str = "IFSC: ICIC0000023";
pub const PAYMENT_METHOD: &str = "RTGS";

pub const APPROVER: &str = "A. Sharma (Plant Head)";
pub const APPROVER_EMAIL: &str = "a.sharma@plant.example.com";
pub const CFO_EMAIL: &str = "cfo@example.com";
pub const VENDOR_EMAIL: &str = "sales@toolingsolutions.example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub name: &'static str,
    pub target: &'static str,
    pub quoted: &'static str,
    pub value: &'static str,
}

pub const LINE_ITEMS: [LineItem; 4] = [
    LineItem {
        name: "IP Carrier Injection Molding Tool",
        target: "₹ 3.10 Cr",
        quoted: "₹ 3.12 Cr",
        value: "₹ 3 Cr",
    },
    LineItem {
        name: "Chute Chanel Vibration",
        target: "₹ 42 L",
        quoted: "₹ 44 L",
        value: "₹ 40 L",
    },
    LineItem {
        name: "Cockpit Checking Fixture",
        target: "₹ 26 L",
        quoted: "₹ 27 L",
        value: "₹ 25 L",
    },
    LineItem {
        name: "Laser Scoring Fixture",
        target: "₹ 72 L",
        quoted: "₹ 68 L",
        value: "₹ 70 L",
    },
];

pub const MILESTONES: [&str; 3] = [
    "M1: Tooling Advance",
    "M2: PPAP Approval",
    "M3: SOP / Batch Delivery",
];

/// A purchasing organisation offered on the PR screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchasingOrg {
    pub code: &'static str,
    pub label: &'static str,
    pub allowed_for_plant: bool,
}

pub const PURCHASING_ORGS: [PurchasingOrg; 2] = [
    PurchasingOrg {
        code: "1000",
        label: "Corporate Purchasing",
        allowed_for_plant: false,
    },
    PurchasingOrg {
        code: "2000",
        label: "Chakan Plant Purchasing",
        allowed_for_plant: true,
    },
];

/// Fixed figures for one payment tranche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTranche {
    pub label: &'static str,
    pub share: &'static str,
    pub amount: &'static str,
    pub status_update: &'static str,
}

pub const STAGE_PAYMENT: PaymentTranche = PaymentTranche {
    label: "Stage Payment (20%)",
    share: "Stage (20%)",
    amount: "₹ 87 L",
    status_update: "Stage Payment Completed - Awaiting Delivery",
};

pub const FINAL_PAYMENT: PaymentTranche = PaymentTranche {
    label: "Final Payment (80%)",
    share: "Final (80%)",
    amount: "₹ 3.48 Cr",
    status_update: "Project Financial Closure - PO Closed",
};
