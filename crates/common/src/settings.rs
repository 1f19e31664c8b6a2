use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
pub use config::ConfigError;
#[cfg(feature = "ssr")]
use config::{Config, Environment, File};
#[cfg(feature = "ssr")]
use std::env;

/// Settings the browser application needs at startup. Published by the site
/// server as `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frontend {
    pub api_url: String,
    pub sidebar_title: String,
}

impl Default for Frontend {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".into(),
            sidebar_title: "Management".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub port: u16,
    pub site_root: String,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            port: 3000,
            site_root: "target/site".into(),
            public_key: None,
            private_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logger {
    pub directory: Option<String>,
    pub level: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            directory: None,
            level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub frontend: Frontend,
}

#[cfg(feature = "ssr")]
impl Settings {
    pub fn with_config_dir(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(File::with_name(&format!("{config_dir}/{run_mode}")).required(false))
            .add_source(File::with_name(&format!("{config_dir}/local")).required(false))
            .add_source(
                Environment::with_prefix("NOTFALLPLAN")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }
}
