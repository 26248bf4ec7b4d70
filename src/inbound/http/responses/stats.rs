use crate::domain::workbench::DashboardStats;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_projects: u64,
    pub active_projects: u64,
    pub completed_projects: u64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub in_progress_tasks: u64,
    pub overdue_tasks: u64,
}

impl From<DashboardStats> for StatsResponse {
    fn from(value: DashboardStats) -> Self {
        Self {
            total_projects: value.total_projects,
            active_projects: value.active_projects,
            completed_projects: value.completed_projects,
            total_tasks: value.total_tasks,
            completed_tasks: value.completed_tasks,
            in_progress_tasks: value.in_progress_tasks,
            overdue_tasks: value.overdue_tasks,
        }
    }
}
