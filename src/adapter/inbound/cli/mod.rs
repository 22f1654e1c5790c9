//! CLI module graph and subcommand dispatch.

pub mod check;
pub mod command;
pub mod console;
pub mod fetch;
pub mod listen;
pub mod output;

use tracing::info;

use crate::error::Result;
use crate::infrastructure::bootstrap::build_context;
use crate::infrastructure::config::settings::Config;
use command::{CheckCommand, Cli, Commands};

/// Run the parsed command line.
///
/// # Errors
///
/// Returns an error if configuration fails to load or the selected command
/// fails.
pub async fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Check(CheckCommand::Config)) = cli.command {
        return check::config(&cli.config);
    }

    let mut config = Config::load(&cli.config)?;
    if cli.verbose > 0 {
        config.logging.level = "debug".to_string();
    }
    config.init_logging();
    info!(
        group_id = %config.groupme.group_id,
        user_id = %config.groupme.user_id,
        "salesboard starting"
    );

    let ctx = build_context(&config);
    match cli.command {
        None | Some(Commands::Console) => console::run(ctx).await,
        Some(Commands::Fetch) => fetch::execute(&ctx).await,
        Some(Commands::Listen) => listen::execute(ctx).await,
        Some(Commands::Check(_)) => Ok(()),
    }
}
