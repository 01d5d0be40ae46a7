use std::fmt;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use tracing::info;

use crate::client::Connection;
use crate::transport::message::render_outbound;
use crate::utils::RelayError;

/// Display name of a client that has not registered any tags.
pub const UNKNOWN_NAME: &str = "unknown";

/// Represents one connected peer in the relay.
///
/// A client owns its connection exclusively. Whether it is active is never
/// cached: every check asks the connection. Tags are kept in the order the
/// peer sent them.
pub struct Client {
    /// Unique identifier for the client, used for deduplication and logs.
    id: String,

    /// The transport connection, if any.
    connection: Option<Box<dyn Connection>>,

    /// Subscription tags, replaced wholesale on registration.
    tags: RwLock<Vec<String>>,
}

impl Client {
    pub fn new(connection: impl Connection + 'static) -> Self {
        Self::with_connection(Some(Box::new(connection)))
    }

    /// A client with no connection attached. It is never active.
    pub fn detached() -> Self {
        Self::with_connection(None)
    }

    fn with_connection(connection: Option<Box<dyn Connection>>) -> Self {
        Self {
            id: format!("client-{}", uuid::Uuid::new_v4()),
            connection,
            tags: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// True iff a connection is attached and it reports itself open.
    pub fn is_active(&self) -> bool {
        self.connection
            .as_ref()
            .is_some_and(|connection| connection.is_open())
    }

    /// Replaces the tag set. An empty set leaves the current tags in place.
    pub fn init_tags(&self, tags: Vec<String>) {
        if tags.is_empty() {
            return;
        }
        info!("set tags \"{}\" for {}", tags.join(", "), self.id);
        *self.tags.write().unwrap_or_else(PoisonError::into_inner) = tags;
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|t| t == tag)
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Tags joined by ", ", or `"unknown"` when none are set.
    pub fn name(&self) -> String {
        let tags = self.tags.read().unwrap_or_else(PoisonError::into_inner);
        if tags.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            tags.join(", ")
        }
    }

    /// Sends a message to the peer. Strings go out verbatim, anything else is
    /// serialized to JSON. Does nothing when the client is inactive.
    pub async fn send(&self, message: &Value) -> Result<(), RelayError> {
        self.send_text(render_outbound(message)).await
    }

    pub async fn send_text(&self, text: impl Into<String>) -> Result<(), RelayError> {
        match &self.connection {
            Some(connection) if connection.is_open() => connection.send(text.into()).await,
            _ => Ok(()),
        }
    }

    /// Marks the underlying connection closed so the next broadcast prunes it.
    pub fn close(&self) {
        if let Some(connection) = &self.connection {
            connection.close();
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("active", &self.is_active())
            .finish()
    }
}
