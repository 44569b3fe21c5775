#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

pub use file_config::{DeployConfig, FileConfig, DEFAULT_CONFIG_PATH, DEFAULT_SCHEMA_PATH};
