//! ReviewChannel over an axum WebSocket.
//!
//! Text and binary messages become frames. Ping and pong are answered by the
//! socket itself and never reach the review conversation. A close message or
//! the end of the stream reads as a closed channel.

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};

use crate::ports::{ChannelError, Frame, FrameKind, ReviewChannel};

/// An upgraded websocket used as a review channel.
pub struct WebSocketChannel {
    socket: WebSocket,
}

impl WebSocketChannel {
    pub fn new(socket: WebSocket) -> Self {
        Self { socket }
    }

    /// Sends a close frame. Errors are ignored since the peer may already be
    /// gone.
    pub async fn close(mut self) {
        if let Err(e) = self.socket.send(Message::Close(None)).await {
            tracing::debug!(error = %e, "Close frame not delivered");
        }
    }
}

#[async_trait]
impl ReviewChannel for WebSocketChannel {
    async fn send(&mut self, frame: Frame) -> Result<(), ChannelError> {
        self.socket
            .send(to_message(frame))
            .await
            .map_err(|e| ChannelError::Io(e.to_string()))
    }

    async fn receive(&mut self) -> Result<Frame, ChannelError> {
        loop {
            let message = match self.socket.recv().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => return Err(ChannelError::Io(e.to_string())),
                None => return Err(ChannelError::Closed),
            };

            if let Some(result) = to_frame(message) {
                return result;
            }
        }
    }
}

fn to_message(frame: Frame) -> Message {
    match frame.kind {
        FrameKind::Text => Message::Text(
            String::from_utf8(frame.payload)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        ),
        FrameKind::Binary => Message::Binary(frame.payload),
    }
}

/// Maps an inbound message; `None` for control messages to skip.
fn to_frame(message: Message) -> Option<Result<Frame, ChannelError>> {
    match message {
        Message::Text(text) => Some(Ok(Frame::text(text))),
        Message::Binary(bytes) => Some(Ok(Frame::binary(bytes))),
        Message::Ping(_) | Message::Pong(_) => None,
        Message::Close(_) => Some(Err(ChannelError::Closed)),
    }
}
