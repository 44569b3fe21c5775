use crate::config::DeployConfig;
use crate::core::poller::DeploymentPoller;
use crate::core::{Completion, DeploymentReport, DeploymentRequest, SchemaService, Storage};
use crate::utils::error::{DeployError, Result};
use chrono::Utc;

/// Reads a schema file as UTF-8 text.
pub async fn read_schema<St: Storage>(storage: &St, path: &str) -> Result<String> {
    let bytes = storage
        .read_file(path)
        .await
        .map_err(|e| DeployError::SchemaFileError {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| DeployError::SchemaFileError {
        path: path.to_string(),
        message: format!("not valid UTF-8: {}", e),
    })
}

pub struct DeploymentEngine<S: SchemaService, St: Storage> {
    poller: DeploymentPoller<S>,
    storage: St,
    config: DeployConfig,
}

impl<S: SchemaService, St: Storage> DeploymentEngine<S, St> {
    pub fn new(service: S, storage: St, config: DeployConfig) -> Self {
        Self {
            poller: DeploymentPoller::new(service),
            storage,
            config,
        }
    }

    pub async fn read_schema(&self) -> Result<String> {
        read_schema(&self.storage, &self.config.schema_path).await
    }

    pub async fn run(&self) -> Result<DeploymentReport> {
        println!("🚀 Deploying GraphQL Schema to AppSync");
        println!("API ID: {}", self.config.api_id);
        println!("Region: {}", self.config.region);
        println!();

        let definition = self.read_schema().await?;
        let schema_chars = definition.chars().count();
        println!("📄 Read schema ({} characters)", schema_chars);

        let request = DeploymentRequest::new(
            self.config.api_id.clone(),
            self.config.region.clone(),
            definition,
        );
        let started_at = Utc::now();

        println!("⬆️  Uploading schema to AppSync...");
        let handle = self.poller.submit(&request).await?;
        println!(
            "✅ Schema upload started (status: {})",
            handle.submitted_status.as_deref().unwrap_or("PROCESSING")
        );

        println!("⏳ Waiting for deployment to complete...");
        let completion = self.poller.await_with(&handle, &self.config.poll).await;
        let finished_at = Utc::now();
        tracing::debug!(
            "Deployment finished after {} polls: {:?}",
            completion.attempts(),
            completion
        );

        match &completion {
            Completion::Succeeded { .. } => {}
            Completion::Failed { details, .. } => {
                return Err(DeployError::DeploymentFailed {
                    details: details
                        .clone()
                        .unwrap_or_else(|| "No details provided".to_string()),
                });
            }
            Completion::TimedOut {
                attempts,
                last_error,
            } => {
                return Err(DeployError::Timeout {
                    attempts: *attempts,
                    last_error: last_error.clone(),
                });
            }
        }

        println!();
        println!("✅ Schema deployed successfully!");

        Ok(DeploymentReport {
            api_id: request.api_id,
            region: request.region,
            schema_chars,
            completion,
            started_at,
            finished_at,
        })
    }
}
