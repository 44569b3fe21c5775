use crate::config::file_config::{DeployConfig, FileConfig, DEFAULT_CONFIG_PATH};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "deploy-schema")]
#[command(about = "Upload a GraphQL schema to AWS AppSync and wait for it to deploy")]
pub struct CliConfig {
    /// Path to the AppSync config file (JSON or TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Path to the GraphQL schema, overrides SchemaPath
    #[arg(short, long)]
    pub schema: Option<String>,

    /// AppSync API id, overrides ApiId
    #[arg(long)]
    pub api_id: Option<String>,

    /// AWS region, overrides Region
    #[arg(long)]
    pub region: Option<String>,

    /// Custom AppSync endpoint, e.g. a local emulator
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Seconds between status polls
    #[arg(long)]
    pub interval_secs: Option<u64>,

    /// Maximum number of status polls before giving up
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Validate config and read the schema without contacting AppSync
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            api_id: self.api_id.clone(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            schema_path: self.schema.clone(),
            interval_seconds: self.interval_secs,
            max_attempts: self.max_attempts,
        }
    }

    /// Loads the config file and applies command-line overrides.
    ///
    /// A missing config file is tolerated only when the flags name both the API and region.
    pub fn load(&self) -> Result<DeployConfig> {
        let overrides = self.overrides();
        let flags_complete = overrides.api_id.is_some() && overrides.region.is_some();

        let file = if flags_complete && !Path::new(&self.config).exists() {
            tracing::debug!("No config file at {}, using flags only", self.config);
            FileConfig::default()
        } else {
            FileConfig::from_file(&self.config)?
        };

        DeployConfig::try_from(file.overlay(overrides))
    }
}
