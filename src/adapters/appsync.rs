use crate::core::{SchemaService, StatusReport};
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_appsync::config::Region;
use aws_sdk_appsync::error::DisplayErrorContext;
use aws_sdk_appsync::primitives::Blob;
use aws_sdk_appsync::Client as AppSyncClient;

/// [`SchemaService`] backed by the AWS AppSync control-plane API.
#[derive(Debug, Clone)]
pub struct AppSyncService {
    client: AppSyncClient,
}

impl AppSyncService {
    pub fn new(client: AppSyncClient) -> Self {
        Self { client }
    }

    pub fn from_conf(config: aws_sdk_appsync::Config) -> Self {
        Self::new(AppSyncClient::from_conf(config))
    }

    /// Builds a client from the default credential chain for `region`.
    pub async fn connect(region: &str, endpoint_url: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(url) = endpoint_url {
            tracing::debug!("Using custom AppSync endpoint: {}", url);
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;
        Self::new(AppSyncClient::new(&sdk_config))
    }
}

#[async_trait]
impl SchemaService for AppSyncService {
    async fn start_schema_creation(&self, api_id: &str, definition: &str) -> Result<Option<String>> {
        let output = self
            .client
            .start_schema_creation()
            .api_id(api_id)
            .definition(Blob::new(definition.as_bytes()))
            .send()
            .await
            .map_err(|e| DeployError::SubmissionError {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output.status().map(|s| s.as_str().to_string()))
    }

    async fn get_schema_creation_status(&self, api_id: &str) -> Result<StatusReport> {
        let output = self
            .client
            .get_schema_creation_status()
            .api_id(api_id)
            .send()
            .await
            .map_err(|e| DeployError::PollError {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let status = output
            .status()
            .map(|s| s.as_str().to_string())
            .ok_or_else(|| DeployError::PollError {
                message: "response did not include a status".to_string(),
            })?;

        Ok(StatusReport {
            status,
            details: output.details().map(str::to_string),
        })
    }
}
