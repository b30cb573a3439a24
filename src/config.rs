use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans over OTLP/gRPC in addition to the JSON log lines.
    pub otlp: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FirebaseConfig {
    /// Google service account key, read once at startup.
    pub credentials_file: String,
    pub api_url: String,
    /// `host:port` of a local auth emulator. Disables the token exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emulator_host: Option<String>,
    /// Only consulted in emulator mode, where no key file is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "account-gateway".to_string(),
                },
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 5000,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp: false,
                },
                firebase: FirebaseConfig {
                    credentials_file: "keys.json".to_string(),
                    api_url: "https://identitytoolkit.googleapis.com".to_string(),
                    emulator_host: None,
                    project_id: None,
                    timeout_secs: 30,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = AppConfig::load()?;

            assert_eq!(config.service.name, "account-gateway");
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 5000);
            assert_eq!(config.logging.level, "info");
            assert!(!config.logging.otlp);
            assert_eq!(config.firebase.credentials_file, "keys.json");
            assert_eq!(config.firebase.emulator_host, None);
            assert_eq!(config.firebase.timeout_secs, 30);

            Ok(())
        });
    }

    #[test]
    fn test_toml_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [server]
                port = 8081

                [firebase]
                credentials_file = "/etc/gateway/keys.json"
                "#,
            )?;
            jail.set_env("APP_SERVER__HOST", "0.0.0.0");
            jail.set_env("APP_FIREBASE__EMULATOR_HOST", "localhost:9099");
            jail.set_env("APP_FIREBASE__PROJECT_ID", "demo-project");

            let config = AppConfig::load()?;

            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 8081);
            assert_eq!(config.firebase.credentials_file, "/etc/gateway/keys.json");
            assert_eq!(
                config.firebase.emulator_host.as_deref(),
                Some("localhost:9099")
            );
            assert_eq!(config.firebase.project_id.as_deref(), Some("demo-project"));

            Ok(())
        });
    }
}
