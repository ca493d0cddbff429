//! Long polling loop.

use std::{future::Future, time::Duration};

use tokio::task::{JoinError, JoinSet};

use crate::{bot::LookupBot, telegram::TelegramClient};

/// Pause after a failed `getUpdates` call before polling again.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Poll for messages and hand each one to the bot on its own task.
///
/// Returns once `shutdown` resolves and every in-flight message has been
/// answered.
pub async fn run_until<F>(client: &TelegramClient, bot: LookupBot, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut offset: Option<i64> = None;
    let mut in_flight = JoinSet::new();

    tracing::info!("Polling Telegram for updates");

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            polled = client.get_updates(offset) => match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        if let Some((chat_id, text)) = update.into_text() {
                            let bot = bot.clone();
                            in_flight.spawn(async move { bot.dispatch(chat_id, &text).await });
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, retry_in = ?RETRY_DELAY, "Polling failed");
                    tokio::select! {
                        _ = &mut shutdown => break,
                        _ = tokio::time::sleep(RETRY_DELAY) => {}
                    }
                }
            },
        }

        // Reap finished handlers so the set does not grow unbounded.
        while let Some(joined) = in_flight.try_join_next() {
            log_join_error(joined);
        }
    }

    tracing::info!(in_flight = in_flight.len(), "Shutting down, waiting for in-flight lookups");
    while let Some(joined) = in_flight.join_next().await {
        log_join_error(joined);
    }
}

fn log_join_error(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, panicked = e.is_panic(), "Message handler task failed");
    }
}
