use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::relay::{Published, Subscription};

/// Subscription fed by an in-process channel. Dropping the sender ends it.
pub struct ChannelSubscription {
    channel: String,
    receiver: mpsc::UnboundedReceiver<String>,
}

impl ChannelSubscription {
    pub fn new(channel: &str) -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = Self {
            channel: channel.to_string(),
            receiver: rx,
        };
        (tx, subscription)
    }
}

#[async_trait]
impl Subscription for ChannelSubscription {
    fn channel(&self) -> &str {
        &self.channel
    }

    async fn next_message(&mut self) -> Option<Published> {
        let payload = self.receiver.recv().await?;
        Some(Published {
            channel: self.channel.clone(),
            payload,
        })
    }
}
