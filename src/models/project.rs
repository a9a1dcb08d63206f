//! Repair project model and related types.
//!
//! This module defines the [`Project`] struct along with its billing
//! workflow status and the per-report hour summaries linked into it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The billing workflow state of a repair project.
///
/// Projects move strictly forward through the workflow; there is no
/// transition out of the billed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Waiting for the client's advance order notice (内示待ち).
    #[serde(rename = "内示待ち")]
    AwaitingNotice,
    /// Repair work underway (作業中).
    #[serde(rename = "作業中")]
    InProgress,
    /// Hours being reconciled against the order before invoicing (照合中).
    #[serde(rename = "照合中")]
    Reconciling,
    /// Invoiced to the client (請求済).
    #[serde(rename = "請求済")]
    Billed,
}

impl ProjectStatus {
    /// All statuses in workflow order.
    pub const WORKFLOW: [ProjectStatus; 4] = [
        ProjectStatus::AwaitingNotice,
        ProjectStatus::InProgress,
        ProjectStatus::Reconciling,
        ProjectStatus::Billed,
    ];

    /// Returns the next status in the workflow.
    ///
    /// Billed is terminal and advances to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_engine::models::ProjectStatus;
    ///
    /// assert_eq!(
    ///     ProjectStatus::AwaitingNotice.advance(),
    ///     ProjectStatus::InProgress
    /// );
    /// assert_eq!(ProjectStatus::Billed.advance(), ProjectStatus::Billed);
    /// ```
    pub fn advance(self) -> Self {
        match self {
            ProjectStatus::AwaitingNotice => ProjectStatus::InProgress,
            ProjectStatus::InProgress => ProjectStatus::Reconciling,
            ProjectStatus::Reconciling => ProjectStatus::Billed,
            ProjectStatus::Billed => ProjectStatus::Billed,
        }
    }

    /// The Japanese label used on screens and in serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::AwaitingNotice => "内示待ち",
            ProjectStatus::InProgress => "作業中",
            ProjectStatus::Reconciling => "照合中",
            ProjectStatus::Billed => "請求済",
        }
    }
}

/// A daily report's crew hours as linked into a project.
///
/// Hours here are crew totals, not per-worker figures, so project billing
/// sums them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedReport {
    /// The day the work was performed.
    pub date: NaiveDate,
    /// The number of workers on the crew that day.
    pub workers: u32,
    /// Regular hours summed over the crew.
    pub regular_hours: Decimal,
    /// Overtime hours summed over the crew.
    pub overtime_hours: Decimal,
}

/// Represents one repair order and the labor recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: String,
    /// The ship the repair applies to.
    pub ship: String,
    /// The client being billed.
    pub client: String,
    /// Current position in the billing workflow.
    pub status: ProjectStatus,
    /// Whether the client's advance order notice has arrived.
    pub notice_received: bool,
    /// Billing rate in yen per crew-hour.
    pub unit_price: Decimal,
    /// Crew hour summaries of the reports linked to this project.
    pub linked_reports: Vec<LinkedReport>,
    /// The day the order was opened.
    pub created_at: NaiveDate,
}

impl Project {
    /// Total crew hours linked to the project across both categories.
    pub fn total_hours(&self) -> Decimal {
        self.linked_reports
            .iter()
            .map(|r| r.regular_hours + r.overtime_hours)
            .sum()
    }
}
