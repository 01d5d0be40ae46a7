use async_trait::async_trait;
use futures_util::StreamExt;
use redis::aio::PubSub;
use tracing::info;

use crate::config::RedisSettings;
use crate::relay::{Published, Subscription};
use crate::utils::RelayError;

/// Subscription to one Redis pub/sub channel.
pub struct RedisSubscription {
    channel: String,
    pubsub: PubSub,
}

impl RedisSubscription {
    /// Connects to the configured Redis database and subscribes to its channel.
    pub async fn connect(settings: &RedisSettings) -> Result<Self, RelayError> {
        let client = redis::Client::open(settings.url())?;
        let mut pubsub = client.get_async_pubsub().await?;
        pubsub.subscribe(settings.channel.as_str()).await?;
        info!(
            "subscribed to redis channel \"{}\" on {}:{}/{}",
            settings.channel, settings.host, settings.port, settings.db
        );

        Ok(Self {
            channel: settings.channel.clone(),
            pubsub,
        })
    }
}

#[async_trait]
impl Subscription for RedisSubscription {
    fn channel(&self) -> &str {
        &self.channel
    }

    async fn next_message(&mut self) -> Option<Published> {
        let msg = std::pin::pin!(self.pubsub.on_message()).next().await?;
        let payload = match msg.get_payload::<String>() {
            Ok(payload) => payload,
            Err(_) => String::from_utf8_lossy(msg.get_payload_bytes()).into_owned(),
        };
        Some(Published {
            channel: msg.get_channel_name().to_string(),
            payload,
        })
    }
}
