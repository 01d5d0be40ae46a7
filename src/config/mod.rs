mod cli;
mod settings;

use std::path::Path;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File, FileFormat};

pub use cli::Args;
pub use settings::{RedisSettings, ServerSettings, Settings};

/// Prefix of environment variables read by [`load_config`], e.g.
/// `RELAY_REDIS_CHANNEL`.
pub const ENV_PREFIX: &str = "RELAY";

/// Loads the configuration from the default file, an optional explicit file
/// and environment variables, in increasing order of precedence.
/// Missing values are filled from `Settings::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder =
        Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(file_format(path)).required(true));
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("_"))
        .build()?;

    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();
    let server = partial.server;
    let redis = partial.redis;

    Ok(Settings {
        server: ServerSettings {
            host: server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
            debug: server
                .as_ref()
                .and_then(|s| s.debug)
                .unwrap_or(default.server.debug),
        },
        redis: RedisSettings {
            host: redis
                .as_ref()
                .and_then(|r| r.host.clone())
                .unwrap_or(default.redis.host),
            port: redis
                .as_ref()
                .and_then(|r| r.port)
                .unwrap_or(default.redis.port),
            db: redis.as_ref().and_then(|r| r.db).unwrap_or(default.redis.db),
            channel: redis
                .as_ref()
                .and_then(|r| r.channel.clone())
                .unwrap_or(default.redis.channel),
        },
    })
}

// Config files without a recognised extension are read as INI.
fn file_format(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        Some("yaml" | "yml") => FileFormat::Yaml,
        _ => FileFormat::Ini,
    }
}
