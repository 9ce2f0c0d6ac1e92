use anyhow::{Context, Result};
use harvest::{HarvestClient, TimeEntryQuery};

/// `--stop`: stop today's running timer, if any.
pub async fn stop(client: &HarvestClient, user_id: i64) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let query = TimeEntryQuery::new(today, today).with_user(user_id);
    let entries = client
        .list_time_entries(&query)
        .await
        .context("Failed to list time entries")?;

    // There should only ever be one running entry; take the first.
    let Some(running) = entries.iter().find(|entry| entry.is_running) else {
        println!("No running timer found to stop.");
        return Ok(());
    };

    let entry = client
        .stop_time_entry(running.id)
        .await
        .context("Failed to stop time entry")?;

    println!(
        "Stopped time entry {} for project {} task {}",
        entry.id, entry.project.name, entry.task.name
    );
    tracing::info!(entry_id = entry.id, "stopped time entry");
    Ok(())
}
