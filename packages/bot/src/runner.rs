//! Bot execution logic with reconnection support.

use std::future::Future;

use rand::Rng;

use crate::{
    config::BotConfig,
    domain::{Lifecycle, Transport},
    error::BotError,
    session::run_session,
    usecase::CommandInterpreter,
};

/// Run the bot until `shutdown` resolves.
///
/// Every disconnect (including a failed connect) schedules one reconnect after
/// `config.reconnect_delay`; there is no retry limit.
pub async fn run_bot<T, R, F>(
    mut transport: T,
    mut interpreter: CommandInterpreter<R>,
    config: BotConfig,
    shutdown: F,
) -> Result<(), BotError>
where
    T: Transport,
    R: Rng,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lifecycle = Lifecycle::new();
    lifecycle.start();

    loop {
        tracing::info!("Attempting to connect to {}", config.url);

        let session = tokio::select! {
            _ = &mut shutdown => None,
            result = run_session(&mut transport, &mut lifecycle, &mut interpreter, &config) => Some(result),
        };
        match session {
            None => break,
            Some(Ok(())) => tracing::info!("Disconnected from server"),
            Some(Err(e)) => tracing::warn!("Connection failed: {}", e),
        }

        if !lifecycle.on_close() {
            tracing::info!("No reconnect scheduled in state {:?}", lifecycle.state());
            break;
        }
        tracing::info!(
            "Reconnecting in {} seconds...",
            config.reconnect_delay.as_secs_f32()
        );

        let interrupted = tokio::select! {
            _ = &mut shutdown => true,
            _ = tokio::time::sleep(config.reconnect_delay) => false,
        };
        if interrupted {
            break;
        }
        if !lifecycle.on_reconnect_timer() {
            tracing::warn!("Reconnect skipped in state {:?}", lifecycle.state());
            break;
        }
    }

    lifecycle.shutdown();
    transport.close().await;
    tracing::info!("Bot stopped");
    Ok(())
}
