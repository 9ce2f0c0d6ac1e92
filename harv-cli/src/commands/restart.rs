use anyhow::{Context, Result};
use harvest::{HarvestClient, TimeEntryQuery};

use crate::format;
use crate::prompt;

/// `--restart`: pick one of today's entries and restart its timer.
pub async fn restart(client: &HarvestClient, user_id: i64) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let query = TimeEntryQuery::new(today, today).with_user(user_id);
    let entries = client
        .list_time_entries(&query)
        .await
        .context("Failed to list time entries")?;

    if entries.is_empty() {
        println!("No time entries found for today.");
        return Ok(());
    }

    let labels: Vec<String> = entries.iter().map(format::entry_label).collect();
    let index = prompt::select(&labels, "Select a time entry to restart:")?;
    let selected = &entries[index];

    if selected.is_running {
        println!("Time entry {} is already running.", selected.id);
        return Ok(());
    }

    let entry = client
        .restart_time_entry(selected.id)
        .await
        .context("Failed to restart time entry")?;

    println!(
        "Restarted time entry {} for project {} task {}",
        entry.id, entry.project.name, entry.task.name
    );
    tracing::info!(entry_id = entry.id, "restarted time entry");
    Ok(())
}
