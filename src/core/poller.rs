use crate::core::{
    Completion, DeploymentRequest, DeploymentStatus, RemoteState, SchemaService,
    SubmissionHandle,
};
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// One status query: the remote's own wording next to the mapped state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollObservation {
    pub raw_status: String,
    pub status: DeploymentStatus,
}

/// Drives a single schema deployment from submission to a terminal state.
pub struct DeploymentPoller<S: SchemaService> {
    service: S,
}

impl<S: SchemaService> DeploymentPoller<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn submit(&self, request: &DeploymentRequest) -> Result<SubmissionHandle> {
        validate_non_empty_string("api_id", &request.api_id).map_err(|_| {
            DeployError::SubmissionError {
                message: "API id is missing".to_string(),
            }
        })?;
        validate_non_empty_string("definition", &request.definition).map_err(|_| {
            DeployError::SubmissionError {
                message: "schema definition is empty".to_string(),
            }
        })?;

        tracing::debug!(
            "Submitting {} characters of schema to API {}",
            request.definition.len(),
            request.api_id
        );
        let submitted_status = self
            .service
            .start_schema_creation(&request.api_id, &request.definition)
            .await
            .map_err(|e| match e {
                DeployError::SubmissionError { .. } => e,
                other => DeployError::SubmissionError {
                    message: other.to_string(),
                },
            })?;

        Ok(SubmissionHandle {
            api_id: request.api_id.clone(),
            submitted_status,
        })
    }

    pub async fn poll(&self, handle: &SubmissionHandle) -> Result<DeploymentStatus> {
        Ok(self.observe(handle).await?.status)
    }

    pub async fn observe(&self, handle: &SubmissionHandle) -> Result<PollObservation> {
        let report = self
            .service
            .get_schema_creation_status(&handle.api_id)
            .await
            .map_err(|e| match e {
                DeployError::PollError { .. } => e,
                other => DeployError::PollError {
                    message: other.to_string(),
                },
            })?;

        let status = match RemoteState::parse(&report.status) {
            RemoteState::Pending => DeploymentStatus::Processing,
            RemoteState::Succeeded => DeploymentStatus::Succeeded,
            RemoteState::Failed => DeploymentStatus::Failed {
                details: report.details,
            },
            RemoteState::Unrecognized(raw) => {
                tracing::warn!("⚠️  Unknown status: {}", raw);
                DeploymentStatus::Processing
            }
        };
        Ok(PollObservation {
            raw_status: report.status,
            status,
        })
    }

    /// Polls until a terminal status or until `max_attempts` polls have been made,
    /// sleeping `interval` between consecutive polls.
    ///
    /// A failed poll uses up an attempt; the most recent failure is reported on timeout.
    pub async fn await_completion(
        &self,
        handle: &SubmissionHandle,
        interval: Duration,
        max_attempts: u32,
    ) -> Completion {
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                tokio::time::sleep(interval).await;
            }

            let observation = match self.observe(handle).await {
                Ok(observation) => observation,
                Err(e) => {
                    tracing::warn!("  Poll failed (attempt {}/{}): {}", attempt, max_attempts, e);
                    last_error = Some(e.to_string());
                    continue;
                }
            };
            tracing::info!(
                "  Status: {} (attempt {}/{})",
                observation.raw_status,
                attempt,
                max_attempts
            );

            match observation.status {
                DeploymentStatus::Succeeded => {
                    return Completion::Succeeded { attempts: attempt };
                }
                DeploymentStatus::Failed { details } => {
                    return Completion::Failed {
                        details,
                        attempts: attempt,
                    };
                }
                DeploymentStatus::Processing => {
                    last_error = None;
                }
            }
        }

        Completion::TimedOut {
            attempts: max_attempts,
            last_error,
        }
    }

    pub async fn await_with(&self, handle: &SubmissionHandle, settings: &PollSettings) -> Completion {
        self.await_completion(handle, settings.interval, settings.max_attempts)
            .await
    }
}
