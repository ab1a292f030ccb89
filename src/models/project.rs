use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Active)
    }

    /// Parse loose CLI input ("on-hold", "active", ...).
    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "active" => Some(ProjectStatus::Active),
            "on hold" | "onhold" | "hold" => Some(ProjectStatus::OnHold),
            "completed" | "complete" | "done" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

/// How a project bills its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingModel {
    Fixed,
    Hourly,
}

/// A client engagement that tasks are logged against.
///
/// Task records carry their own denormalized `project_name`, so renaming a
/// project here does not rewrite historical entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub client_id: u32,
    pub client_name: String,
    #[serde(default)]
    pub team_lead_id: Option<u32>,
    #[serde(default)]
    pub manager_id: Option<u32>,
    #[serde(default)]
    pub team_member_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_billing_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
}

impl Project {
    /// Short billing summary for list views, e.g. `hourly @ 60` or `fixed 18000`.
    pub fn billing_label(&self) -> String {
        match self.billing_type {
            Some(BillingModel::Hourly) => match &self.default_billing_rate {
                Some(rate) => format!("hourly @ {}", rate),
                None => "hourly".to_string(),
            },
            Some(BillingModel::Fixed) => match &self.fixed_cost {
                Some(cost) => format!("fixed {}", cost),
                None => "fixed".to_string(),
            },
            None => "-".to_string(),
        }
    }
}
