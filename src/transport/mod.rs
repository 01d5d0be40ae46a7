//! The `transport` module is responsible for communication with websocket
//! clients.
//!
//! It defines the envelope format shared with the broker relay and the
//! websocket server itself: accepting connections, registering them with the
//! client registry, answering keepalives and applying tag registrations.

pub mod message;
pub mod websocket;
