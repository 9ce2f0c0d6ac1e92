use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{Project, ProjectQuery, Task, TaskAssignment, TimeEntry, TimeEntryPayload, TimeEntryQuery},
    Credentials, HarvestUrl,
};

const CLIENT_USER_AGENT: &str = concat!("harv/", env!("CARGO_PKG_VERSION"));

pub struct HarvestClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HarvestClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, HarvestFetchError> {
        let resp = req
            .header("Authorization", format!("Bearer {}", self.credentials.token))
            .header("Harvest-Account-Id", &self.credentials.account_id)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|e| HarvestFetchError::ResponseError(e.to_string()))?;

        if resp.status() == StatusCode::UNAUTHORIZED || resp.status() == StatusCode::FORBIDDEN {
            return Err(HarvestFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(HarvestFetchError::ResponseError(format!(
                "{}: {}",
                status, body
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            HarvestFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, HarvestFetchError> {
        self.execute(self.client.get(url.as_ref())).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        body: &B,
    ) -> Result<T, HarvestFetchError> {
        self.execute(self.client.post(url.as_ref()).json(body)).await
    }

    async fn patch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, HarvestFetchError> {
        self.execute(self.client.patch(url.as_ref())).await
    }

    /// All active projects visible to the authenticated user.
    #[tracing::instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>, HarvestFetchError> {
        let url = HarvestUrl::new()
            .append_path("/projects")
            .with_query(&ProjectQuery { is_active: true });

        let response: ProjectsResponse = self.fetch(url).await?;
        Ok(response.projects)
    }

    /// Tasks assigned to the given project.
    #[tracing::instrument(skip(self))]
    pub async fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>, HarvestFetchError> {
        let url =
            HarvestUrl::new().append_path(&format!("/projects/{}/task_assignments", project_id));

        let response: TaskAssignmentsResponse = self.fetch(url).await?;
        Ok(response
            .task_assignments
            .into_iter()
            .map(|assignment| assignment.task)
            .collect())
    }

    /// Time entries matching the given date range / user filter.
    #[tracing::instrument(skip(self, query))]
    pub async fn list_time_entries(
        &self,
        query: &TimeEntryQuery,
    ) -> Result<Vec<TimeEntry>, HarvestFetchError> {
        let url = HarvestUrl::new().append_path("/time_entries").with_query(query);

        let response: TimeEntriesResponse = self.fetch(url).await?;
        Ok(response.time_entries)
    }

    /// Creates a new entry; its timer starts running immediately.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_time_entry(
        &self,
        payload: &TimeEntryPayload,
    ) -> Result<TimeEntry, HarvestFetchError> {
        let url = HarvestUrl::new().append_path("/time_entries");
        self.post(url, payload).await
    }

    /// Restarts the timer of a stopped entry.
    #[tracing::instrument(skip(self))]
    pub async fn restart_time_entry(&self, id: i64) -> Result<TimeEntry, HarvestFetchError> {
        let url = HarvestUrl::new().append_path(&format!("/time_entries/{}/restart", id));
        self.patch(url).await
    }

    /// Stops the timer of a running entry.
    #[tracing::instrument(skip(self))]
    pub async fn stop_time_entry(&self, id: i64) -> Result<TimeEntry, HarvestFetchError> {
        let url = HarvestUrl::new().append_path(&format!("/time_entries/{}/stop", id));
        self.patch(url).await
    }
}

#[derive(Error, Debug)]
pub enum HarvestFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct TaskAssignmentsResponse {
    task_assignments: Vec<TaskAssignment>,
}

#[derive(Debug, Deserialize)]
struct TimeEntriesResponse {
    time_entries: Vec<TimeEntry>,
}
