//! The `error` module defines the error type used throughout `tagrelay`.
//!
//! Most of these errors are recovered locally by the loop that observes them
//! (a bad payload is logged and skipped). Only listener, configuration and
//! broker subscription failures travel all the way out of `Server::run`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("payload is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("envelope must be a json object")]
    NotAnObject,

    #[error("envelope has no `message` field")]
    MissingMessage,

    #[error("invalid tag value: {0}")]
    InvalidTag(String),

    #[error("connection closed")]
    ConnectionClosed,

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("subscription to channel `{0}` ended")]
    SubscriptionEnded(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
