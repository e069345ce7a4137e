use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreSettings {
    Supabase {
        url: String,
        api_key: String,
        #[serde(default = "default_table")]
        table: String,
    },
    File {
        path: String,
    },
}

fn default_table() -> String {
    "AgroAI".to_string()
}

/// Load `config/agro` overlaid with `AGRO__*` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/agro")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("AGRO").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
