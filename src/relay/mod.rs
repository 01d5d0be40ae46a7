//! The `relay` module bridges the external pub/sub channel into registry
//! broadcasts.
//!
//! `Subscription` is the capability the relay needs from a broker client;
//! `RedisSubscription` provides it on top of a Redis pub/sub connection.

pub mod bridge;
pub mod redis_subscription;
pub mod subscription;

pub use bridge::{relay_message, run_relay};
pub use redis_subscription::RedisSubscription;
pub use subscription::{Published, Subscription};

#[cfg(test)]
pub(crate) mod channel;
