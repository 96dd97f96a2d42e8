//! A single connection session: open, join, then process events until the
//! connection goes away.

use rand::Rng;

use crate::{
    config::BotConfig,
    domain::{Lifecycle, OutboundMessage, Transport, TransportEvent},
    error::BotError,
    infrastructure::dto::{decode_inbound, encode_outbound},
    usecase::CommandInterpreter,
};

/// Run one session.
///
/// Returns `Ok(())` once the connection is closed (by the peer, or by us after
/// a transport error), and `Err` only when the connection could not be opened.
/// The caller owns the reconnect decision.
pub async fn run_session<T, R>(
    transport: &mut T,
    lifecycle: &mut Lifecycle,
    interpreter: &mut CommandInterpreter<R>,
    config: &BotConfig,
) -> Result<(), BotError>
where
    T: Transport + ?Sized,
    R: Rng,
{
    transport.open(&config.url).await?;
    tracing::info!("Connected to {}", config.url);

    if !lifecycle.on_open() {
        transport.close().await;
        return Ok(());
    }

    let join = OutboundMessage::Join {
        nick: interpreter.state().profile.nickname.clone(),
        password: config.password.clone(),
        channel: config.channel.clone(),
    };
    deliver(transport, join).await;
    tracing::info!(
        "Joined channel '{}' as '{}'",
        config.channel,
        interpreter.state().profile.nickname
    );

    loop {
        match transport.next_event().await {
            TransportEvent::Message(raw) => {
                tracing::debug!("Received payload: {}", raw);
                let message = match decode_inbound(&raw) {
                    Ok(message) => message,
                    Err(e) => {
                        tracing::warn!("Dropping inbound payload: {}", e);
                        continue;
                    }
                };
                for outbound in interpreter.handle(message) {
                    deliver(transport, outbound).await;
                }
            }
            TransportEvent::Error(cause) => {
                tracing::warn!("WebSocket error: {}", cause);
                transport.close().await;
                return Ok(());
            }
            TransportEvent::Closed => {
                tracing::info!("Server closed the connection");
                return Ok(());
            }
        }
    }
}

/// Send a record, logging and swallowing any failure.
async fn deliver<T>(transport: &mut T, message: OutboundMessage)
where
    T: Transport + ?Sized,
{
    tracing::debug!("Sending {:?}", message);
    let result = match encode_outbound(message) {
        Ok(payload) => transport.send(payload).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to send message: {}", e);
    }
}
