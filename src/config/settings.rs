use serde::Deserialize;

/// Top-level configuration settings for the relay.
///
/// Includes settings for the websocket server and the redis channel it relays.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub redis: RedisSettings,
}

/// Configuration settings for the websocket server (`[main]` section).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration settings for the redis subscription (`[redis]` section).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub channel: String,
}

impl RedisSettings {
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    #[serde(rename = "main")]
    pub server: Option<PartialServerSettings>,
    pub redis: Option<PartialRedisSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PartialRedisSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db: Option<i64>,
    pub channel: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "localhost".to_string(),
                port: 9999,
                debug: false,
            },
            redis: RedisSettings {
                host: "localhost".to_string(),
                port: 6379,
                db: 0,
                channel: "ws-channel".to_string(),
            },
        }
    }
}
