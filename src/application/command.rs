//! Answering chat commands found in new messages.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::store::SaleStore;
use crate::domain::{format_usd, parse_command, ChatCommand, Message};
use crate::port::BotPoster;

/// Tally of one dispatch pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Messages recognised as commands.
    pub commands: usize,
    /// Replies the poster accepted.
    pub replies_sent: usize,
    /// Replies that failed to send. These are not retried.
    pub replies_failed: usize,
}

/// Build the reply for `command` issued by the author of `message`.
#[must_use]
pub fn reply_for(command: ChatCommand, message: &Message, store: &SaleStore) -> String {
    match command {
        ChatCommand::Leaderboard => store.leaderboard().render(),
        ChatCommand::MySales => {
            let author = message.author();
            let total = store.total_for(author);
            if total > Decimal::ZERO {
                format!("{author}, your total sales today: {}", format_usd(total))
            } else {
                format!("{author}, you have no sales submitted today.")
            }
        }
    }
}

/// Scans messages for commands and posts replies through a [`BotPoster`].
pub struct CommandProcessor<'a> {
    poster: &'a dyn BotPoster,
}

impl<'a> CommandProcessor<'a> {
    #[must_use]
    pub fn new(poster: &'a dyn BotPoster) -> Self {
        Self { poster }
    }

    /// Reply to every command in `messages`, in the order given.
    ///
    /// Anything that is not a command is skipped. A failed send is logged and
    /// the pass carries on with the next message.
    pub async fn process(&self, messages: &[Message], store: &SaleStore) -> DispatchReport {
        let mut report = DispatchReport::default();

        for message in messages {
            let Ok(command) = parse_command(message.text()) else {
                continue;
            };
            report.commands += 1;

            let reply = reply_for(command, message, store);
            debug!(
                command = command.trigger(),
                author = message.author(),
                message_id = %message.id(),
                "Answering command"
            );

            match self.poster.post(&reply).await {
                Ok(()) => {
                    report.replies_sent += 1;
                    info!(
                        command = command.trigger(),
                        author = message.author(),
                        "Reply posted"
                    );
                }
                Err(e) => {
                    report.replies_failed += 1;
                    warn!(
                        command = command.trigger(),
                        error = %e,
                        "Failed to post reply"
                    );
                }
            }
        }

        report
    }
}
