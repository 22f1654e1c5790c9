//! Handler for the `listen` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::application::{BotContext, Listener};
use crate::error::Result;

/// Answer commands until Ctrl+C.
pub async fn execute(ctx: BotContext) -> Result<()> {
    output::note("Listening for !mysales and !leaderboard commands. Press Ctrl+C to stop.");

    let mut listener = Listener::start(ctx).await?;
    tokio::select! {
        () = listener.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    output::note("Stopped listening.");
    Ok(())
}
