use std::path::PathBuf;

use clap::Parser;
use config::ConfigError;

use super::{Settings, load_config};

/// Command line of the relay. Every flag given here overrides the config
/// file and environment.
#[derive(Debug, Parser)]
#[command(name = "tagrelay", about = "Relays a redis channel to tagged websocket clients")]
pub struct Args {
    /// Config file ([main] and [redis] sections)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Websocket listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Websocket listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Redis host
    #[arg(long)]
    pub rhost: Option<String>,

    /// Redis port
    #[arg(long)]
    pub rport: Option<u16>,

    /// Redis database index
    #[arg(long)]
    pub rdb: Option<i64>,

    /// Redis channel to relay
    #[arg(long)]
    pub rchannel: Option<String>,

    /// Debug logging
    #[arg(short = 'D', long)]
    pub debug: bool,
}

impl Args {
    /// Loads the layered configuration and applies the command line on top.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let mut settings = load_config(self.config.as_deref())?;
        self.apply(&mut settings);
        Ok(settings)
    }

    pub fn apply(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(host) = &self.rhost {
            settings.redis.host = host.clone();
        }
        if let Some(port) = self.rport {
            settings.redis.port = port;
        }
        if let Some(db) = self.rdb {
            settings.redis.db = db;
        }
        if let Some(channel) = &self.rchannel {
            settings.redis.channel = channel.clone();
        }
        if self.debug {
            settings.server.debug = true;
        }
    }
}
