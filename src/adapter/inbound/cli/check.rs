//! Handler for `check config`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load and validate the configuration, then print a summary.
///
/// The access token itself is never printed.
pub fn config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let polling = config.poll_settings();

    output::success(&format!("{} is valid", path.display()));
    output::field("API", &config.groupme.api_url);
    output::field("Group", &config.groupme.group_id);
    output::field("Bot", &config.groupme.bot_id);
    output::field("User", &config.groupme.user_id);
    output::field("Token", "set");
    output::field("Window", polling.poll_window);
    output::field(
        "Interval",
        format!("{}s", polling.poll_interval.as_secs()),
    );
    Ok(())
}
