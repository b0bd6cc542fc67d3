//! Read models for the admin dashboard aggregates.

use courtside_core::analytics::BranchMonthCount;
use courtside_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Headline counts shown on the dashboard landing page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub total_branches: i64,
    pub total_programs: i64,
    pub total_trainers: i64,
    pub pending_trial_classes: i64,
    pub new_contacts: i64,
    pub visitors_this_month: i64,
}

/// Count for one month of a year.
#[derive(Debug, Clone, FromRow)]
pub struct MonthTotal {
    pub month: i32,
    pub total: i64,
}

/// Count for one calendar year.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: i64,
}

/// Visit count for one page path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageVisits {
    pub page_path: String,
    pub total: i64,
}

/// Trial-class bookings per branch per month, before regrouping.
#[derive(Debug, Clone, FromRow)]
pub struct BranchMonthRow {
    pub branch_id: Option<DbId>,
    pub branch_name: Option<String>,
    pub month: i32,
    pub total: i64,
}

impl From<BranchMonthRow> for BranchMonthCount {
    fn from(row: BranchMonthRow) -> Self {
        BranchMonthCount {
            branch_id: row.branch_id,
            branch_name: row.branch_name,
            month: row.month,
            total: row.total,
        }
    }
}

/// Count of contacts in one status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusTotal {
    pub status: String,
    pub total: i64,
}
