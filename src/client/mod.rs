//! The `client` module defines the representation of a connected peer.
//!
//! It provides the `Client` struct, which wraps a single live connection
//! together with the subscription tags the peer declared, and the
//! `Connection` trait describing what the relay needs from a transport.

pub mod connection;
pub mod relay_client;

pub use connection::{Connection, WsConnection};
pub use relay_client::{Client, UNKNOWN_NAME};

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
