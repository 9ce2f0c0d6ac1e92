use std::io::Write;

use anyhow::{Context, Result};
use harvest::{HarvestClient, TimeEntryQuery};

use crate::format;

/// `--status`: print a one-line summary of today's tracking, formatted for
/// tmux by default or for a plain status bar with `--bar`.
pub async fn status(client: &HarvestClient, user_id: i64, bar: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let query = TimeEntryQuery::new(today, today).with_user(user_id);
    let entries = client
        .list_time_entries(&query)
        .await
        .context("Failed to list time entries")?;

    let line = format::status_line(&entries, bar);
    if bar {
        println!("{}", line);
    } else {
        // tmux consumes the output verbatim; no trailing newline.
        print!("{}", line);
        std::io::stdout().flush()?;
    }
    Ok(())
}
