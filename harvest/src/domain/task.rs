use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
}

/// One row of the `/projects/{id}/task_assignments` response. Only the
/// nested task is interesting to us.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub task: Task,
}
