use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_REPO_URL: &str = "https://github.com/shopware/shopware.git";
pub const DEFAULT_REPO_PATH: &str = "./shopware_repo";
pub const DEFAULT_PRODUCT: &str = "Shopware";
pub const DEFAULT_STATE_FILE: &str = ".release-state";

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            source: SourceConfig::default(),
            notify: NotifyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Where the changelog fragments come from.
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Git URL of the repository carrying `changelog/release-*` directories.
    #[serde(default = "default_repo_url")]
    pub url: String,
    /// Local checkout path (cloned on first use, pulled afterwards).
    #[serde(default = "default_repo_path")]
    pub path: String,
    /// Product name used in notification text.
    #[serde(default = "default_product")]
    pub product: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { url: default_repo_url(), path: default_repo_path(), product: default_product() }
    }
}

fn default_repo_url() -> String {
    DEFAULT_REPO_URL.to_string()
}

fn default_repo_path() -> String {
    DEFAULT_REPO_PATH.to_string()
}

fn default_product() -> String {
    DEFAULT_PRODUCT.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotifyConfig {
    /// JSON file holding the last announced version.
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { state_file: default_state_file() }
    }
}

fn default_state_file() -> String {
    DEFAULT_STATE_FILE.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Config file the values came from; `None` when built-in defaults apply.
    pub loaded_from: Option<PathBuf>,
    pub repo_url: String,
    pub repo_path: PathBuf,
    pub product: String,
    pub state_file: PathBuf,
    pub logging: LoggingConfig,
}
