use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct CatalogSettings {
    /// JSON document seeding the in-memory catalog. Empty catalog when unset.
    pub seed_path: Option<PathBuf>,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}

/// Layers defaults, an optional `config/base` file and `BILLING_*`
/// environment variables, e.g. `BILLING_APPLICATION__PORT=9000`.
pub fn read_config() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080)?
        .add_source(config::File::with_name("config/base").required(false))
        .add_source(
            config::Environment::with_prefix("BILLING")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()
}
