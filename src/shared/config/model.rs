use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;
use std::num::NonZeroUsize;
use thiserror::Error;

use crate::command::types::OutputMode;
use crate::shared::datetime::TimeZoneSelector;

const DEFAULT_CONFIG_NAME: &str = "mp_influx";
const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(5).expect("batch size is non-zero");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0} environment variable not found.")]
    MissingVar(&'static str),

    #[error("INFLUX_ORG or INFLUX_ORG_ID environment variable not found.")]
    MissingOrg,

    #[error("Unsupported InfluxDB host '{0}': only http:// hosts are supported")]
    UnsupportedScheme(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub influx: InfluxConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfluxConfig {
    pub host: Option<String>,
    pub token: Option<String>,
    pub org: Option<String>,
    pub org_id: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for InfluxConfig {
    fn default() -> Self {
        Self {
            host: None,
            token: None,
            org: None,
            org_id: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// How the query endpoint addresses the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgRef {
    Id(String),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluxCredentials {
    pub host: String,
    pub token: String,
    pub org: OrgRef,
}

impl InfluxConfig {
    /// Validate that everything needed to reach the store is present.
    pub fn credentials(&self) -> Result<InfluxCredentials, SettingsError> {
        let host = non_blank(&self.host).ok_or(SettingsError::MissingVar("INFLUX_HOST"))?;
        let token = non_blank(&self.token).ok_or(SettingsError::MissingVar("INFLUX_TOKEN"))?;
        let org = match (non_blank(&self.org_id), non_blank(&self.org)) {
            (Some(id), _) => OrgRef::Id(id),
            (None, Some(name)) => OrgRef::Name(name),
            (None, None) => return Err(SettingsError::MissingOrg),
        };

        if !host.starts_with("http://") {
            return Err(SettingsError::UnsupportedScheme(host));
        }

        Ok(InfluxCredentials {
            host: host.trim_end_matches('/').to_string(),
            token,
            org,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Trends per remote query
    #[serde(default = "default_batch_size")]
    pub batch_size: NonZeroUsize,
    /// Batches fetched at once (1 = sequential)
    #[serde(default = "default_max_concurrent_batches")]
    pub max_concurrent_batches: NonZeroUsize,
    #[serde(default)]
    pub timezone: TimeZoneSelector,
    #[serde(default)]
    pub output: OutputMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_concurrent_batches: default_max_concurrent_batches(),
            timezone: TimeZoneSelector::Utc,
            output: OutputMode::Dense,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_stderr_level")]
    pub stderr_level: String,
    pub log_dir: Option<String>,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stderr_level: default_stderr_level(),
            log_dir: None,
            file_level: default_file_level(),
        }
    }
}

const fn default_request_timeout_secs() -> u64 {
    60
}

const fn default_batch_size() -> NonZeroUsize {
    DEFAULT_BATCH_SIZE
}

const fn default_max_concurrent_batches() -> NonZeroUsize {
    NonZeroUsize::MIN
}

fn default_stderr_level() -> String {
    "warn".to_string()
}

fn default_file_level() -> String {
    "info".to_string()
}

/// Load settings from an optional TOML file, `MP_INFLUX__*` variables and the
/// plain `INFLUX_*` credential variables, in increasing priority.
pub fn load_settings(config_path: Option<&str>) -> Result<Settings, SettingsError> {
    let path = config_path
        .map(str::to_string)
        .or_else(|| env::var("MP_INFLUX_CONFIG").ok());

    let builder = config::Config::builder();
    let builder = match path {
        Some(path) => builder.add_source(File::with_name(&path)),
        None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
    };
    let builder = builder.add_source(
        Environment::with_prefix("MP_INFLUX")
            .separator("__")
            .try_parsing(true),
    );
    let builder = apply_influx_env(builder, |key| env::var(key).ok())?;

    Ok(builder.build()?.try_deserialize()?)
}

pub(crate) fn apply_influx_env<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    builder
        .set_override_option("influx.host", lookup("INFLUX_HOST"))?
        .set_override_option("influx.token", lookup("INFLUX_TOKEN"))?
        .set_override_option("influx.org", lookup("INFLUX_ORG"))?
        .set_override_option("influx.org_id", lookup("INFLUX_ORG_ID"))
}
