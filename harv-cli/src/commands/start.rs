use std::path::Path;

use anyhow::{bail, Context, Result};
use harvest::{HarvestClient, TimeEntryPayload};

use crate::config::Defaults;
use crate::prompt;

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Default mode: pick a project and task (reusing saved defaults when still
/// valid), collect notes, and create a running time entry for today.
/// `defaults_path` is `None` when the local defaults file is ignored.
pub async fn start(
    client: &HarvestClient,
    note: Option<&str>,
    ticket: Option<&str>,
    defaults_path: Option<&Path>,
) -> Result<()> {
    let mut defaults = match defaults_path {
        Some(path) => Defaults::load(path)?,
        None => Defaults::default(),
    };

    let projects = client
        .list_projects()
        .await
        .context("Failed to list projects")?;
    if projects.is_empty() {
        bail!("no active projects found");
    }

    let project_id = match projects.iter().find(|p| p.id == defaults.project_id) {
        Some(project) => project.id,
        None => {
            let labels: Vec<String> = projects
                .iter()
                .map(|p| format!("{} {CYAN}({}){RESET}", p.name, p.client.name))
                .collect();
            let index = prompt::select(&labels, "Select a project:")?;
            projects[index].id
        }
    };

    let tasks = client
        .list_tasks(project_id)
        .await
        .context("Failed to list tasks")?;
    if tasks.is_empty() {
        bail!("selected project has no assigned tasks");
    }

    let task_id = match tasks.iter().find(|t| t.id == defaults.task_id) {
        Some(task) => task.id,
        None => {
            let labels: Vec<String> = tasks.iter().map(|t| t.name.clone()).collect();
            let index = prompt::select(&labels, "Select a task:")?;
            tasks[index].id
        }
    };

    let notes = match combined_note(ticket, note) {
        Some(notes) => notes,
        None => prompt::input("Enter notes:", "")?,
    };

    let payload = TimeEntryPayload::new(
        project_id,
        task_id,
        chrono::Local::now().date_naive(),
        notes,
    );
    let entry = client
        .create_time_entry(&payload)
        .await
        .context("Failed to create time entry")?;

    println!(
        "Created time entry {} for project {} task {}",
        entry.id, entry.project.name, entry.task.name
    );
    tracing::info!(entry_id = entry.id, project_id, task_id, "created time entry");

    defaults.project_id = project_id;
    defaults.task_id = task_id;
    if let Some(path) = defaults_path {
        if let Err(err) = defaults.save(path) {
            tracing::warn!("Failed to save defaults: {err:#}");
        }
    }

    Ok(())
}

/// Combine the ticket flag with the note flag. The ticket is normalized to a
/// leading `#` and placed on its own line above the note. An empty note
/// counts as absent so the interactive prompt still runs.
fn combined_note(ticket: Option<&str>, note: Option<&str>) -> Option<String> {
    let note = note.filter(|n| !n.is_empty());
    let ticket = ticket.filter(|t| !t.is_empty());

    match (ticket, note) {
        (None, None) => None,
        (None, Some(note)) => Some(note.to_string()),
        (Some(ticket), note) => {
            let ticket = if ticket.starts_with('#') {
                ticket.to_string()
            } else {
                format!("#{}", ticket)
            };
            match note {
                Some(note) => Some(format!("{}\n{}", ticket, note)),
                None => Some(format!("{}\n", ticket)),
            }
        }
    }
}
