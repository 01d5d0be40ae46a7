use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use tungstenite::protocol::Message as WsMessage;

use crate::utils::RelayError;

/// Transport capability consumed by a [`Client`](super::Client).
///
/// `send` is the outbound suspension point; `is_open` must reflect the
/// current state on every call.
#[async_trait]
pub trait Connection: Send + Sync {
    fn is_open(&self) -> bool;

    async fn send(&self, text: String) -> Result<(), RelayError>;

    /// Marks the connection as finished. Later `is_open` calls return false.
    fn close(&self);
}

/// Websocket connection backed by the channel feeding a writer task.
///
/// The writer task owns the sink half of the socket; once it exits (send
/// failure) the channel closes and the connection reports itself closed.
#[derive(Debug, Clone)]
pub struct WsConnection {
    sender: UnboundedSender<WsMessage>,
    open: Arc<AtomicBool>,
}

impl WsConnection {
    pub fn new(sender: UnboundedSender<WsMessage>) -> Self {
        Self {
            sender,
            open: Arc::new(AtomicBool::new(true)),
        }
    }
}

#[async_trait]
impl Connection for WsConnection {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst) && !self.sender.is_closed()
    }

    async fn send(&self, text: String) -> Result<(), RelayError> {
        self.sender
            .send(WsMessage::Text(text.into()))
            .map_err(|_| RelayError::ConnectionClosed)
    }

    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }
}
