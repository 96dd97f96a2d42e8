//! WebSocket を使った Transport 実装
//!
//! ## 責務
//!
//! - 接続の確立と切断（`connect_async`）
//! - テキストフレームの送受信
//! - Close フレーム・ストリーム終端・読み取りエラーを `TransportEvent` に変換
//!
//! Ping/Pong は tungstenite が自動で応答するため、ここでは読み飛ばします。

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use crate::{
    domain::{Transport, TransportEvent},
    error::BotError,
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket transport holding at most one open connection
#[derive(Default)]
pub struct WebSocketTransport {
    stream: Option<WsStream>,
}

impl WebSocketTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for WebSocketTransport {
    async fn open(&mut self, url: &str) -> Result<(), BotError> {
        self.close().await;

        let (stream, response) = connect_async(url)
            .await
            .map_err(|e| BotError::Connection(e.to_string()))?;
        tracing::debug!("WebSocket handshake completed with status {}", response.status());

        self.stream = Some(stream);
        Ok(())
    }

    async fn send(&mut self, payload: String) -> Result<(), BotError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| BotError::Send("not connected".to_string()))?;
        stream
            .send(Message::Text(payload.into()))
            .await
            .map_err(|e| BotError::Send(e.to_string()))
    }

    async fn next_event(&mut self) -> TransportEvent {
        let Some(stream) = self.stream.as_mut() else {
            return TransportEvent::Closed;
        };

        let event = loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => {
                    break TransportEvent::Message(text.as_str().to_owned());
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::debug!("Server sent close frame: {:?}", frame);
                    break TransportEvent::Closed;
                }
                Some(Ok(Message::Binary(data))) => {
                    tracing::debug!("Ignoring {} bytes of binary data", data.len());
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => break TransportEvent::Error(e.to_string()),
                None => break TransportEvent::Closed,
            }
        };

        if event == TransportEvent::Closed {
            self.stream = None;
        }
        event
    }

    async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take()
            && let Err(e) = stream.close(None).await
        {
            tracing::debug!("Error while closing WebSocket: {}", e);
        }
    }
}
