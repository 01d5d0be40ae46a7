use async_trait::async_trait;

/// One message received on a subscribed channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub channel: String,
    pub payload: String,
}

/// A live subscription to a single broker channel.
#[async_trait]
pub trait Subscription: Send {
    /// Name of the subscribed channel.
    fn channel(&self) -> &str;

    /// Waits for the next published message. `None` means the subscription
    /// is gone for good.
    async fn next_message(&mut self) -> Option<Published>;
}
