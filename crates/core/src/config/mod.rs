//! Configuration: TOML config file plus environment-provided credentials.

pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::SlackCredentials;
pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{LoggingConfig, ResolvedConfig};
