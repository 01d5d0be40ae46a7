use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::Connection;
use crate::utils::RelayError;

/// In-memory connection that records everything sent through it.
/// Clones share state, so a test can keep a handle after moving one into a
/// `Client`.
#[derive(Debug, Clone)]
pub struct MockConnection {
    open: Arc<AtomicBool>,
    failing: Arc<AtomicBool>,
    sent: Arc<Mutex<Vec<String>>>,
}

impl MockConnection {
    pub fn open() -> Self {
        Self {
            open: Arc::new(AtomicBool::new(true)),
            failing: Arc::new(AtomicBool::new(false)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn closed() -> Self {
        let connection = Self::open();
        connection.set_open(false);
        connection
    }

    /// Open, but every send fails.
    pub fn failing() -> Self {
        let connection = Self::open();
        connection.failing.store(true, Ordering::SeqCst);
        connection
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connection for MockConnection {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn send(&self, text: String) -> Result<(), RelayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RelayError::ConnectionClosed);
        }
        self.sent.lock().unwrap().push(text);
        Ok(())
    }

    fn close(&self) {
        self.set_open(false);
    }
}
