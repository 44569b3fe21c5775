use crate::domain::model::StatusReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Remote API that accepts schema definitions and reports their progress.
///
/// Implementations map transport and service failures to
/// `DeployError::SubmissionError` and `DeployError::PollError` respectively.
#[async_trait]
pub trait SchemaService: Send + Sync {
    /// Returns the status string reported on acceptance, if the service sent one.
    async fn start_schema_creation(&self, api_id: &str, definition: &str)
        -> Result<Option<String>>;

    async fn get_schema_creation_status(&self, api_id: &str) -> Result<StatusReport>;
}
