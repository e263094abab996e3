//! Review Channel Port - the bidirectional message transport of a review
//! conversation.
//!
//! In production this is a websocket; tests use scripted channels. The engine
//! depends only on ordered send and receive of typed frames.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Port for an established, ordered, message-framed connection.
#[async_trait]
pub trait ReviewChannel: Send {
    /// Sends one frame.
    async fn send(&mut self, frame: Frame) -> Result<(), ChannelError>;

    /// Waits for the next data frame from the peer.
    async fn receive(&mut self) -> Result<Frame, ChannelError>;
}

/// Type tag of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Text,
    Binary,
}

/// One discrete message on the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Creates a text frame.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: FrameKind::Text,
            payload: content.into().into_bytes(),
        }
    }

    /// Creates a binary frame.
    pub fn binary(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: FrameKind::Binary,
            payload: payload.into(),
        }
    }

    /// Creates a frame of the given kind carrying `content`.
    pub fn with_kind(kind: FrameKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            payload: content.into().into_bytes(),
        }
    }

    /// Payload decoded as UTF-8, replacing invalid sequences.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Errors raised by a channel transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("channel closed by peer")]
    Closed,

    #[error("no message received within {0:?}")]
    Timeout(Duration),

    #[error("channel I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_frame_round_trips_content() {
        let frame = Frame::text("great tyres");
        assert_eq!(frame.kind, FrameKind::Text);
        assert_eq!(frame.to_text(), "great tyres");
    }

    #[test]
    fn with_kind_keeps_binary_tag() {
        let frame = Frame::with_kind(FrameKind::Binary, "Sorry to hear that.");
        assert_eq!(frame.kind, FrameKind::Binary);
        assert_eq!(frame.payload, b"Sorry to hear that.".to_vec());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let frame = Frame::binary(vec![0x66, 0xff, 0x6f]);
        assert_eq!(frame.to_text(), "f\u{fffd}o");
    }
}
