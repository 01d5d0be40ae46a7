use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::registry::Clients;
use crate::relay::Subscription;
use crate::transport::message::{Envelope, render_outbound};
use crate::utils::RelayError;

/// Relays every message published on `subscription` to `clients`.
///
/// A payload that cannot be decoded is logged and dropped. The loop only
/// ends when the subscription itself is lost, which is reported as an error.
pub async fn run_relay<S: Subscription>(
    mut subscription: S,
    clients: Arc<Clients>,
) -> Result<(), RelayError> {
    while let Some(published) = subscription.next_message().await {
        debug!("message on {}: {}", published.channel, published.payload);
        if let Err(e) = relay_message(&clients, &published.payload).await {
            warn!("Dropping \"{}\": {e}", published.payload);
        }
    }
    Err(RelayError::SubscriptionEnded(subscription.channel().to_string()))
}

/// Decodes one broker payload and broadcasts it.
pub async fn relay_message(clients: &Clients, payload: &str) -> Result<(), RelayError> {
    let envelope = Envelope::from_broker(payload)?;
    let tags = envelope.target_tags();
    info!(
        "send: {} - \"{}\"",
        if tags.is_empty() { "ALL".to_string() } else { tags.join(", ") },
        render_outbound(&envelope.message)
    );
    clients.broadcast(&envelope.message, tags).await;
    Ok(())
}
