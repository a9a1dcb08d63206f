//! Dashboard statistics.
//!
//! This module derives the yard's morning-meeting numbers from the report
//! and project collections instead of keeping running counters anywhere.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BillingPeriod, DailyReport, Project, ProjectStatus};

/// The headline figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Projects currently in progress.
    pub active_projects: usize,
    /// Total crew headcount across today's daily reports.
    pub workers_today: usize,
    /// Crew hours, regular plus overtime, across all reports in today's month.
    pub crew_hours_this_month: Decimal,
    /// Projects still waiting on their work notice.
    pub awaiting_notice: usize,
}

/// Derives the dashboard statistics for a given day.
///
/// Every figure is recomputed from the collections on each call, so the
/// numbers can never drift from the reports and projects they summarize.
///
/// # Arguments
///
/// * `reports` - All daily reports
/// * `projects` - All projects
/// * `today` - The day the dashboard is rendered for
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::dashboard_stats;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
/// let stats = dashboard_stats(&[], &[], today);
///
/// assert_eq!(stats.active_projects, 0);
/// assert_eq!(stats.workers_today, 0);
/// assert_eq!(stats.crew_hours_this_month, Decimal::ZERO);
/// ```
pub fn dashboard_stats(
    reports: &[DailyReport],
    projects: &[Project],
    today: NaiveDate,
) -> DashboardStats {
    let this_month = BillingPeriod::from_date(today);

    let workers_today = reports
        .iter()
        .filter(|report| report.date == today)
        .map(|report| report.crew_size())
        .sum();

    let crew_hours_this_month = reports
        .iter()
        .filter(|report| this_month.contains(report.date))
        .map(|report| report.crew_total_hours())
        .sum();

    DashboardStats {
        active_projects: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::InProgress)
            .count(),
        workers_today,
        crew_hours_this_month,
        awaiting_notice: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::AwaitingNotice)
            .count(),
    }
}

/// Groups projects into one bucket per status, in workflow order.
///
/// Every status gets a bucket even when no project holds it, so the
/// kanban board always renders all four columns. Within a bucket,
/// projects keep their input order.
pub fn group_by_status(projects: &[Project]) -> Vec<(ProjectStatus, Vec<&Project>)> {
    ProjectStatus::WORKFLOW
        .iter()
        .map(|status| {
            let bucket = projects
                .iter()
                .filter(|project| project.status == *status)
                .collect();
            (*status, bucket)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, HourSplit, WorkInterval};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_report(date_ymd: (i32, u32, u32), crew: usize, regular: &str, overtime: &str) -> DailyReport {
        DailyReport {
            id: format!("rpt-{}", date_ymd.2),
            date: date(date_ymd.0, date_ymd.1, date_ymd.2),
            ship: "第一志成丸".to_string(),
            department: Department::Deck,
            workers: (0..crew).map(|i| format!("作業員 {}", i)).collect(),
            interval: WorkInterval {
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                break_hours: Decimal::ONE,
            },
            split: HourSplit {
                regular_hours: dec(regular),
                overtime_hours: dec(overtime),
            },
        }
    }

    fn make_project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            ship: "MHI-2398".to_string(),
            client: "三菱重工 下関".to_string(),
            status,
            notice_received: status != ProjectStatus::AwaitingNotice,
            unit_price: dec("3000"),
            linked_reports: vec![],
            created_at: date(2026, 2, 20),
        }
    }

    // ==========================================================================
    // ST-001: project counts split by status
    // ==========================================================================
    #[test]
    fn test_st_001_counts_projects_by_status() {
        let projects = vec![
            make_project("prj-001", ProjectStatus::InProgress),
            make_project("prj-002", ProjectStatus::InProgress),
            make_project("prj-003", ProjectStatus::AwaitingNotice),
            make_project("prj-004", ProjectStatus::Billed),
        ];

        let stats = dashboard_stats(&[], &projects, date(2026, 2, 24));
        assert_eq!(stats.active_projects, 2);
        assert_eq!(stats.awaiting_notice, 1);
    }

    // ==========================================================================
    // ST-002: workers today sums crew sizes over today's reports only
    // ==========================================================================
    #[test]
    fn test_st_002_workers_today_sums_todays_crews() {
        let reports = vec![
            make_report((2026, 2, 24), 6, "8", "2"),
            make_report((2026, 2, 24), 4, "8", "0"),
            make_report((2026, 2, 23), 5, "8", "0"),
        ];

        let stats = dashboard_stats(&reports, &[], date(2026, 2, 24));
        assert_eq!(stats.workers_today, 10);
    }

    // ==========================================================================
    // ST-003: monthly crew hours cover the whole month, nothing more
    // ==========================================================================
    #[test]
    fn test_st_003_crew_hours_cover_the_month() {
        let reports = vec![
            // 6 crew * 10.0h and 4 crew * 8.0h in February
            make_report((2026, 2, 24), 6, "8", "2"),
            make_report((2026, 2, 3), 4, "8", "0"),
            // January is out of scope
            make_report((2026, 1, 30), 5, "8", "0"),
        ];

        let stats = dashboard_stats(&reports, &[], date(2026, 2, 24));
        assert_eq!(stats.crew_hours_this_month, dec("92"));
    }

    // ==========================================================================
    // ST-004: empty collections yield all-zero stats
    // ==========================================================================
    #[test]
    fn test_st_004_empty_collections_are_all_zero() {
        let stats = dashboard_stats(&[], &[], date(2026, 2, 24));
        assert_eq!(
            stats,
            DashboardStats {
                active_projects: 0,
                workers_today: 0,
                crew_hours_this_month: dec("0"),
                awaiting_notice: 0,
            }
        );
    }

    // ==========================================================================
    // ST-005: grouping yields all four columns in workflow order
    // ==========================================================================
    #[test]
    fn test_st_005_grouping_keeps_workflow_order() {
        let projects = vec![
            make_project("prj-001", ProjectStatus::Billed),
            make_project("prj-002", ProjectStatus::AwaitingNotice),
            make_project("prj-003", ProjectStatus::InProgress),
        ];

        let grouped = group_by_status(&projects);
        let statuses: Vec<ProjectStatus> = grouped.iter().map(|(status, _)| *status).collect();
        assert_eq!(statuses.as_slice(), ProjectStatus::WORKFLOW.as_slice());

        assert_eq!(grouped[0].1.len(), 1);
        assert_eq!(grouped[0].1[0].id, "prj-002");
        assert_eq!(grouped[3].1[0].id, "prj-001");
    }

    #[test]
    fn test_grouping_keeps_empty_buckets() {
        let projects = vec![make_project("prj-001", ProjectStatus::InProgress)];

        let grouped = group_by_status(&projects);
        assert_eq!(grouped.len(), 4);
        assert!(grouped[0].1.is_empty());
        assert!(grouped[2].1.is_empty());
        assert!(grouped[3].1.is_empty());
    }

    #[test]
    fn test_grouping_preserves_input_order_within_a_bucket() {
        let projects = vec![
            make_project("prj-001", ProjectStatus::Reconciling),
            make_project("prj-002", ProjectStatus::Reconciling),
        ];

        let grouped = group_by_status(&projects);
        let reconciling: Vec<&str> = grouped[2].1.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(reconciling, vec!["prj-001", "prj-002"]);
    }

    #[test]
    fn test_dashboard_stats_serialize() {
        let stats = DashboardStats {
            active_projects: 2,
            workers_today: 10,
            crew_hours_this_month: dec("92"),
            awaiting_notice: 1,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"active_projects\":2"));
        assert!(json.contains("\"crew_hours_this_month\":\"92\""));
    }
}
