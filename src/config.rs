use serde::Deserialize;
use thiserror::Error;

/// Longest accepted token lifetime: one year.
pub const MAX_EXPIRY_IN_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub jwt: Jwt,
    pub azure_devops: AzureDevOps,
    pub observability: Observability,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

/// Bearer token signing parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct Jwt {
    pub key: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_in_minutes: i64,
}

/// Remote work tracking service settings.
#[derive(Debug, Deserialize, Clone)]
pub struct AzureDevOps {
    pub organization: String,
    pub project: String,
    pub pat: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Observability {
    pub service_name: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub enable_metrics: bool,
}

fn default_base_url() -> String {
    "https://dev.azure.com".to_string()
}

fn default_api_version() -> String {
    "7.0".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("missing configuration value: {0}")]
    Missing(&'static str),

    #[error("invalid configuration value: {0}")]
    Invalid(&'static str),
}

impl Settings {
    /// Rejects settings the service cannot start with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            (self.jwt.key.as_str(), "jwt.key"),
            (self.jwt.issuer.as_str(), "jwt.issuer"),
            (self.jwt.audience.as_str(), "jwt.audience"),
            (self.azure_devops.organization.as_str(), "azure_devops.organization"),
            (self.azure_devops.project.as_str(), "azure_devops.project"),
            (self.azure_devops.pat.as_str(), "azure_devops.pat"),
        ];
        if let Some((_, name)) = required.into_iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(SettingsError::Missing(name));
        }
        if !(1..=MAX_EXPIRY_IN_MINUTES).contains(&self.jwt.expiry_in_minutes) {
            return Err(SettingsError::Invalid("jwt.expiry_in_minutes"));
        }
        Ok(())
    }
}

/// Load settings from `config/default.toml`, `config/<env>.toml`, and env overrides.
pub fn load() -> Result<Settings, SettingsError> {
    let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{env_name}")).required(false))
        .add_source(config::Environment::with_prefix("WORKITEMS").separator("__"))
        .build()?
        .try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
