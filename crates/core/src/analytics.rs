//! Shaping of dashboard aggregates into chart-ready series.
//!
//! The database returns sparse `(month, total)` rows; charts want exactly
//! twelve labelled points per series.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::DbId;

/// Short month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Series label for rows whose branch was removed or never set.
pub const UNASSIGNED_BRANCH: &str = "Unassigned";

/// One point of a monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// 1-based month number.
    pub month: u32,
    pub label: &'static str,
    pub total: i64,
}

/// A sparse aggregate row: count per branch per month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchMonthCount {
    pub branch_id: Option<DbId>,
    pub branch_name: Option<String>,
    pub month: i32,
    pub total: i64,
}

/// Monthly series for one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchSeries {
    pub branch_id: Option<DbId>,
    pub branch_name: String,
    pub total: i64,
    pub months: Vec<MonthlyCount>,
}

/// Expand sparse `(month, total)` points into twelve zero-filled entries.
///
/// Months outside `1..=12` are ignored; repeated months are summed.
pub fn monthly_series<I>(points: I) -> Vec<MonthlyCount>
where
    I: IntoIterator<Item = (i32, i64)>,
{
    let mut totals = [0i64; 12];
    for (month, total) in points {
        if (1..=12).contains(&month) {
            totals[(month - 1) as usize] += total;
        }
    }
    totals
        .iter()
        .enumerate()
        .map(|(idx, total)| MonthlyCount {
            month: idx as u32 + 1,
            label: MONTH_LABELS[idx],
            total: *total,
        })
        .collect()
}

/// Regroup flat branch/month rows into one zero-filled series per branch.
///
/// Series are ordered by branch name, with the unassigned bucket last.
pub fn group_by_branch(rows: Vec<BranchMonthCount>) -> Vec<BranchSeries> {
    let mut grouped: BTreeMap<Option<DbId>, (Option<String>, Vec<(i32, i64)>)> = BTreeMap::new();
    for row in rows {
        let slot = grouped
            .entry(row.branch_id)
            .or_insert_with(|| (None, Vec::new()));
        if slot.0.is_none() {
            slot.0 = row.branch_name;
        }
        slot.1.push((row.month, row.total));
    }

    let mut series: Vec<BranchSeries> = grouped
        .into_iter()
        .map(|(branch_id, (name, points))| {
            let months = monthly_series(points);
            BranchSeries {
                branch_id,
                branch_name: match branch_id {
                    Some(_) => name.unwrap_or_else(|| UNASSIGNED_BRANCH.to_string()),
                    None => UNASSIGNED_BRANCH.to_string(),
                },
                total: months.iter().map(|m| m.total).sum(),
                months,
            }
        })
        .collect();

    series.sort_by(|a, b| {
        a.branch_id
            .is_none()
            .cmp(&b.branch_id.is_none())
            .then_with(|| a.branch_name.cmp(&b.branch_name))
    });
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_always_twelve_months() {
        let series = monthly_series(Vec::new());
        assert_eq!(series.len(), 12);
        assert!(series.iter().all(|m| m.total == 0));
        assert_eq!(series[0].label, "Jan");
        assert_eq!(series[11].month, 12);
    }

    #[test]
    fn sparse_points_are_placed_and_summed() {
        let series = monthly_series(vec![(3, 5), (3, 2), (12, 1), (13, 99), (0, 7)]);
        assert_eq!(series[2].total, 7);
        assert_eq!(series[11].total, 1);
        assert_eq!(series.iter().map(|m| m.total).sum::<i64>(), 8);
    }

    fn row(branch_id: Option<DbId>, name: Option<&str>, month: i32, total: i64) -> BranchMonthCount {
        BranchMonthCount {
            branch_id,
            branch_name: name.map(str::to_string),
            month,
            total,
        }
    }

    #[test]
    fn groups_rows_per_branch() {
        let series = group_by_branch(vec![
            row(Some(2), Some("West"), 1, 4),
            row(Some(1), Some("East"), 1, 3),
            row(Some(2), Some("West"), 2, 6),
            row(None, None, 5, 1),
        ]);

        let names: Vec<&str> = series.iter().map(|s| s.branch_name.as_str()).collect();
        assert_eq!(names, vec!["East", "West", UNASSIGNED_BRANCH]);

        let west = &series[1];
        assert_eq!(west.total, 10);
        assert_eq!(west.months[0].total, 4);
        assert_eq!(west.months[1].total, 6);
        assert_eq!(west.months.len(), 12);

        assert_eq!(series[2].months[4].total, 1);
    }

    #[test]
    fn empty_input_gives_no_series() {
        assert!(group_by_branch(Vec::new()).is_empty());
    }
}
