pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{DeployConfig, FileConfig};

pub use crate::adapters::{AppSyncService, LocalStorage};
pub use crate::core::{
    conflicts::{resolve_conflicts, ConflictResolution},
    deploy::DeploymentEngine,
    poller::{DeploymentPoller, PollSettings},
};
pub use crate::domain::model::{Completion, DeploymentReport, DeploymentRequest, DeploymentStatus};
pub use crate::utils::error::{DeployError, Result};
