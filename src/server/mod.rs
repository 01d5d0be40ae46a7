//! Composition root: owns the configuration and the client registry and
//! runs the websocket server and the broker relay side by side.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Settings;
use crate::registry::Clients;
use crate::relay::{RedisSubscription, Subscription, run_relay};
use crate::transport::websocket::start_websocket_server;
use crate::utils::RelayError;

pub struct Server {
    settings: Settings,
    clients: Arc<Clients>,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            clients: Arc::new(Clients::new()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clients(&self) -> Arc<Clients> {
        self.clients.clone()
    }

    /// Binds the configured address and relays the configured redis channel.
    ///
    /// Does not return under normal operation. Returns an error when the
    /// listener cannot be bound or the redis subscription fails.
    pub async fn run(&self) -> Result<(), RelayError> {
        let listener = TcpListener::bind(self.settings.server.address()).await?;
        let relay = async {
            let subscription = RedisSubscription::connect(&self.settings.redis).await?;
            run_relay(subscription, self.clients()).await
        };

        tokio::select! {
            res = start_websocket_server(listener, self.clients()) => res,
            res = relay => res,
        }
    }

    /// Serves websocket clients on `listener`, relaying `subscription`.
    pub async fn serve<S: Subscription>(
        &self,
        listener: TcpListener,
        subscription: S,
    ) -> Result<(), RelayError> {
        info!("relaying channel \"{}\"", subscription.channel());
        tokio::select! {
            res = start_websocket_server(listener, self.clients()) => res,
            res = run_relay(subscription, self.clients()) => res,
        }
    }
}
