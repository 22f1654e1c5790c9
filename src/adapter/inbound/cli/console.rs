//! Interactive operator console.
//!
//! Reads `fetch`, `listen`, or `exit` from the operator. Anything else prints
//! a usage hint and prompts again. A failed `fetch` is reported and the
//! console keeps running.

use std::io::{BufRead, IsTerminal};

use dialoguer::Input;
use tracing::warn;

use super::{fetch, listen, output};
use crate::application::BotContext;
use crate::error::Result;

const USAGE: &str = "Unknown command. Type 'fetch', 'listen', or 'exit'.";

/// Commands accepted at the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Fetch,
    Listen,
    Exit,
}

impl ConsoleCommand {
    /// Parse operator input, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "fetch" => Some(Self::Fetch),
            "listen" => Some(Self::Listen),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the prompt loop until `exit` or end of input.
pub async fn run(ctx: BotContext) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::note(
        "Type 'fetch' to show leaderboard, 'listen' to auto-respond to commands, or 'exit' to quit.",
    );

    loop {
        let Some(line) = read_line().await? else {
            break;
        };

        match ConsoleCommand::parse(&line) {
            Some(ConsoleCommand::Exit) => break,
            Some(ConsoleCommand::Fetch) => {
                if let Err(e) = fetch::execute(&ctx).await {
                    warn!(error = %e, "Fetch failed");
                    output::error(&e.to_string());
                }
            }
            Some(ConsoleCommand::Listen) => {
                if let Err(e) = listen::execute(ctx.clone()).await {
                    output::error(&e.to_string());
                }
            }
            None => output::note(USAGE),
        }
    }

    Ok(())
}

/// Read one line of operator input; `None` at end of input.
///
/// Prompts through `dialoguer` on a terminal and falls back to plain line
/// reads when stdin is piped.
async fn read_line() -> Result<Option<String>> {
    let line = tokio::task::spawn_blocking(|| -> Result<Option<String>> {
        if std::io::stdin().is_terminal() {
            let line: String = Input::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()?;
            return Ok(Some(line));
        }

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    })
    .await
    .map_err(|e| std::io::Error::other(e.to_string()))??;

    Ok(line)
}
