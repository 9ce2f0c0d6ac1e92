use anyhow::{bail, Context, Result};

use crate::config::GlobalConfig;
use crate::prompt;

/// First-run flow: collect account credentials interactively and persist
/// them to the global config.
pub fn run_setup(config: &mut GlobalConfig) -> Result<()> {
    println!("harv needs to be configured. Please provide the following information:");
    println!();

    let account_id = prompt::input("Harvest Account ID:", "")?;
    if account_id.trim().is_empty() {
        bail!("account ID cannot be empty");
    }

    let access_token =
        rpassword::prompt_password("Harvest Access Token: ").context("Failed to read access token")?;
    if access_token.trim().is_empty() {
        bail!("access token cannot be empty");
    }

    let user_id = prompt::input("Harvest User ID:", "")?;
    let user_id: i64 = user_id
        .trim()
        .parse()
        .context("user ID must be a number")?;

    config.account_id = account_id.trim().to_string();
    config.access_token = access_token.trim().to_string();
    config.user_id = user_id;
    config.save()?;

    println!("Configuration saved successfully!");
    Ok(())
}
