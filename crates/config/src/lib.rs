use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub mod node;

pub use node::{CaptchaFeature, NodeConfiguration, NodeFeatures, ServiceFeature, VoiceFeature};

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "parley.toml",
    "config/parley.toml",
    "crates/config/parley.toml",
    "../parley.toml",
    "../config/parley.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Overrides for the media service advertised by the node.
///
/// ```
/// use parley_config::MediaConfig;
///
/// let media = MediaConfig {
///     autumn_url: Some("https://files.example".to_string()),
///     default_max_side: Some(256),
/// };
/// assert_eq!(media.preview_side(None), Some(256));
/// assert_eq!(media.preview_side(Some(64)), Some(64));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Use this media base URL instead of the node's
    #[serde(default)]
    pub autumn_url: Option<String>,
    /// Longest side requested for image previews
    #[serde(default)]
    pub default_max_side: Option<u32>,
}

impl MediaConfig {
    /// Media base URL: the local override, else the node's if enabled
    pub fn resolve_url<'a>(&'a self, node: &'a NodeConfiguration) -> Option<&'a str> {
        self.autumn_url.as_deref().or_else(|| node.media_url())
    }

    /// Longest preview side: the requested one, else the configured default
    pub fn preview_side(&self, requested: Option<u32>) -> Option<u32> {
        requested.or(self.default_max_side)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl LoggingConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

/// Load the client configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use parley_config::load;
///
/// std::env::remove_var("PARLEY_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.logging.filter.is_empty());
/// ```
pub fn load() -> anyhow::Result<ClientConfig> {
    let defaults = ClientConfig::default();

    let mut builder = config::Config::builder()
        .set_default("logging.filter", defaults.logging.filter.clone())?;

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("PARLEY_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via PARLEY_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(config::Environment::with_prefix("PARLEY").separator("__"));

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<ClientConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded client configuration");
    Ok(config)
}
