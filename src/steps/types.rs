use serde::Serialize;
use std::fmt;

/// The party responsible for a step. Selects the screen family that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Actor {
    #[serde(rename = "BD")]
    Bd,
    #[serde(rename = "PM")]
    Pm,
    System,
    Customer,
    Vendor,
}

impl Actor {
    pub fn code(&self) -> &'static str {
        match self {
            Actor::Bd => "BD",
            Actor::Pm => "PM",
            Actor::System => "System",
            Actor::Customer => "Customer",
            Actor::Vendor => "Vendor",
        }
    }

    /// Long-form role name shown in the guide panel
    pub fn role_title(&self) -> &'static str {
        match self {
            Actor::Bd => "Business Development Manager",
            Actor::Pm => "Program Manager",
            Actor::System => "SAP S/4HANA Automation",
            Actor::Customer => "Customer",
            Actor::Vendor => "Vendor",
        }
    }

    pub fn role_summary(&self) -> &'static str {
        match self {
            Actor::Bd => "Responsible for sales & initiating projects.",
            Actor::Pm => "Oversees execution & validates financials.",
            Actor::System => "Executes automated ERP transactions without manual entry.",
            Actor::Customer => "OEM customer nominating the program.",
            Actor::Vendor => "Supplier fulfilling the purchase order.",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Manual,
    Automated,
}

/// Process-blueprint annotation attached to a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// One node of the fixed workflow sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: u32,
    pub title: &'static str,
    pub actor: Actor,
    pub description: &'static str,
    pub kind: StepKind,
    pub details: &'static [&'static str],
    pub blueprint: Option<Blueprint>,
}

impl Step {
    pub fn is_automated(&self) -> bool {
        self.kind == StepKind::Automated
    }
}
