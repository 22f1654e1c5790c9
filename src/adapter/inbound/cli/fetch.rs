//! Handler for the `fetch` command.

use crate::adapter::inbound::cli::output;
use crate::application::{run_snapshot, BotContext};
use crate::error::Result;

/// Run one snapshot and show the leaderboard that was published.
pub async fn execute(ctx: &BotContext) -> Result<()> {
    let pb = output::spinner("Fetching messages from GroupMe...");
    let report = match run_snapshot(ctx).await {
        Ok(report) => report,
        Err(e) => {
            output::spinner_fail(&pb, "Fetch failed");
            return Err(e);
        }
    };
    output::spinner_success(&pb, &format!("Fetched {} messages", report.fetched));

    output::block("Leaderboard", &report.leaderboard);
    output::field("Sales", report.sales);
    output::field("Commands", report.dispatch.commands);
    if report.dispatch.replies_failed > 0 {
        output::warning(&format!(
            "{} command replies could not be posted",
            report.dispatch.replies_failed
        ));
    }
    if report.published {
        output::success("Leaderboard posted to the group");
    } else {
        output::warning("Leaderboard could not be posted to the group");
    }
    Ok(())
}
