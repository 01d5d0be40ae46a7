use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::Client;

/// Registry of connected clients.
///
/// Owned by the server and shared with every connection handler and the
/// broker relay. Dead clients are never swept proactively: a broadcast
/// removes the inactive clients it visits.
///
/// The member list is locked only for short, synchronous sections and never
/// across an `.await`, so a broadcast suspended on a slow client does not
/// block registrations.
#[derive(Debug, Default)]
pub struct Clients {
    members: Mutex<Vec<Arc<Client>>>,
}

impl Clients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client if it is active right now.
    ///
    /// Returns whether the client was inserted. Inactive clients and clients
    /// already present are ignored.
    pub fn add_client(&self, client: Arc<Client>) -> bool {
        if !client.is_active() {
            return false;
        }
        let mut members = self.members();
        if members.iter().any(|member| member.id() == client.id()) {
            return false;
        }
        members.push(client);
        debug!("new client connected ({} total)", members.len());
        true
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    pub fn contains(&self, client_id: &str) -> bool {
        self.members().iter().any(|member| member.id() == client_id)
    }

    /// Sends `message` to every client matching at least one of `tags`, or
    /// to every client when `tags` is empty.
    ///
    /// Inactive clients among the selected ones are removed from the
    /// registry and skipped. An unfiltered broadcast therefore prunes the
    /// whole registry, a filtered one only the clients it matched. A failed
    /// send is logged and does not stop delivery to the others.
    pub async fn broadcast(&self, message: &Value, tags: &[String]) {
        for client in self.select_recipients(tags) {
            if let Err(e) = client.send(message).await {
                warn!("Failed to send to {} ({}): {e}", client.id(), client.name());
            }
        }
    }

    // Selection and pruning happen under one lock, delivery happens after.
    fn select_recipients(&self, tags: &[String]) -> Vec<Arc<Client>> {
        let mut members = self.members();

        let (live, dead): (Vec<_>, Vec<_>) = members
            .iter()
            .filter(|client| tags.is_empty() || tags.iter().any(|tag| client.is_tag(tag)))
            .cloned()
            .partition(|client| client.is_active());

        if !dead.is_empty() {
            members.retain(|member| !dead.iter().any(|gone| Arc::ptr_eq(gone, member)));
            debug!("pruned {} inactive clients ({} left)", dead.len(), members.len());
        }
        live
    }

    fn members(&self) -> MutexGuard<'_, Vec<Arc<Client>>> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
