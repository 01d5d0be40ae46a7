//! # tagrelay
//!
//! `tagrelay` relays messages published on a Redis pub/sub channel to
//! websocket clients. Clients may declare subscription tags; a published
//! message carrying tags only reaches the clients holding one of them.
//!
//! ## Core Modules
//!
//! - `client`: a connected peer, its connection and its tags.
//! - `registry`: the set of connected clients and tag-filtered broadcast.
//! - `transport`: the websocket server and the message envelope format.
//! - `relay`: the broker subscription and the loop feeding broadcasts.
//! - `server`: wires the registry, websocket server and relay together.
//! - `config`: configuration loading and command-line overrides.
//! - `utils`: error type and logging setup.

pub mod client;
pub mod config;
pub mod registry;
pub mod relay;
pub mod server;
pub mod transport;
pub mod utils;
