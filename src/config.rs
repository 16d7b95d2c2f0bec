use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// File merged on top of the built-in defaults when present.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `SEEKR_STORAGE__BACKEND=memory`.
pub const ENV_PREFIX: &str = "SEEKR_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub basic: BasicConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub loglevel: String,
    /// Answer CORS preflights for any origin, method and header.
    pub allow_any_origin: bool,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            allow_any_origin: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_url: "sqlite:seekr.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml`, then `SEEKR_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite_file() {
        let cfg = Config::default();
        assert_eq!(cfg.storage.backend, StorageBackend::Sqlite);
        assert_eq!(cfg.storage.database_url, "sqlite:seekr.db");
        assert_eq!(cfg.basic.listen_addr, "0.0.0.0:8000");
        assert!(cfg.basic.allow_any_origin);
    }

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SEEKR_STORAGE__BACKEND", "memory");
            jail.set_env("SEEKR_BASIC__LOGLEVEL", "debug");
            let cfg = Config::load()?;
            assert_eq!(cfg.storage.backend, StorageBackend::Memory);
            assert_eq!(cfg.basic.loglevel, "debug");
            assert_eq!(cfg.storage.max_connections, 5);
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_layered_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [basic]
                listen_addr = "127.0.0.1:9000"

                [storage]
                database_url = "sqlite:other.db"
                "#,
            )?;
            jail.set_env("SEEKR_STORAGE__DATABASE_URL", "sqlite:env.db");
            let cfg = Config::load()?;
            assert_eq!(cfg.basic.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.storage.database_url, "sqlite:env.db");
            Ok(())
        });
    }
}
