use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ClientRef, Project, Task, TaskAssignment};

/// A time entry as returned by `/time_entries`. Harvest reports tracked time
/// as decimal hours; `is_running` marks the entry whose timer is live.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub spent_date: NaiveDate,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub client: ClientRef,
    pub project: Project,
    pub task: Task,
    #[serde(default)]
    pub user_assignment: UserAssignment,
    #[serde(default)]
    pub task_assignment: TaskAssignment,
    pub hours: f64,
    #[serde(default)]
    pub hours_without_timer: f64,
    #[serde(default)]
    pub rounded_hours: f64,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
    pub locked_reason: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub approval_status: String,
    #[serde(default)]
    pub is_billed: bool,
    pub timer_started_at: Option<String>,
    pub started_time: Option<String>,
    pub ended_time: Option<String>,
    #[serde(default)]
    pub is_running: bool,
    pub invoice: Option<Invoice>,
    pub external_reference: Option<ExternalReference>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub budgeted: bool,
    pub billable_rate: Option<f64>,
    pub cost_rate: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAssignment {
    pub id: i64,
    #[serde(default)]
    pub is_project_manager: bool,
    #[serde(default)]
    pub is_active: bool,
    pub budget: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub hourly_rate: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub number: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    pub id: String,
    pub group_id: String,
    pub account_id: String,
    pub permalink: String,
    pub service: String,
    pub service_icon_url: String,
}

/// Payload for `POST /time_entries`. The timer starts immediately because no
/// duration is supplied.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryPayload {
    pub project_id: i64,
    pub task_id: i64,
    pub spent_date: NaiveDate,
    pub notes: String,
}

impl TimeEntryPayload {
    pub fn new(project_id: i64, task_id: i64, spent_date: NaiveDate, notes: String) -> Self {
        Self {
            project_id,
            task_id,
            spent_date,
            notes,
        }
    }
}
