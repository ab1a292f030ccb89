use serde::{Deserialize, Serialize};

/// Billing tag carried on every task entry. Inert for the timesheet math,
/// but reports and exports split hours on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingType {
    #[serde(rename = "billable")]
    Billable,
    #[serde(rename = "non-billable")]
    NonBillable,
}

impl BillingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingType::Billable => "billable",
            BillingType::NonBillable => "non-billable",
        }
    }

    /// Human label for tables and summary cards.
    pub fn label(&self) -> &'static str {
        match self {
            BillingType::Billable => "Billable",
            BillingType::NonBillable => "Non-billable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "billable" | "b" => Some(BillingType::Billable),
            "non-billable" | "nonbillable" | "non_billable" | "nb" => Some(BillingType::NonBillable),
            _ => None,
        }
    }

    pub fn is_billable(&self) -> bool {
        matches!(self, BillingType::Billable)
    }
}

impl Default for BillingType {
    // Entries without an explicit tag count as non-billable in reports.
    fn default() -> Self {
        BillingType::NonBillable
    }
}
