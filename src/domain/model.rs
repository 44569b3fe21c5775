use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schema upload targeting one AppSync API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub api_id: String,
    pub region: String,
    pub definition: String,
}

impl DeploymentRequest {
    pub fn new(
        api_id: impl Into<String>,
        region: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            api_id: api_id.into(),
            region: region.into(),
            definition: definition.into(),
        }
    }
}

/// An accepted submission. The deployment is implicitly processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionHandle {
    pub api_id: String,
    /// Status string the service returned when accepting the upload, if any.
    pub submitted_status: Option<String>,
}

/// What the remote service reports on each status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentStatus {
    Processing,
    Succeeded,
    Failed { details: Option<String> },
}

impl DeploymentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeploymentStatus::Processing)
    }
}

/// Remote status vocabulary as understood by the poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteState {
    Pending,
    Succeeded,
    Failed,
    Unrecognized(String),
}

impl RemoteState {
    pub fn parse(status: &str) -> Self {
        match status {
            "PROCESSING" | "PENDING" => RemoteState::Pending,
            "SUCCESS" => RemoteState::Succeeded,
            "FAILED" => RemoteState::Failed,
            other => RemoteState::Unrecognized(other.to_string()),
        }
    }
}

/// Result of waiting for a deployment to reach a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    Succeeded {
        attempts: u32,
    },
    Failed {
        details: Option<String>,
        attempts: u32,
    },
    TimedOut {
        attempts: u32,
        last_error: Option<String>,
    },
}

impl Completion {
    pub fn attempts(&self) -> u32 {
        match self {
            Completion::Succeeded { attempts }
            | Completion::Failed { attempts, .. }
            | Completion::TimedOut { attempts, .. } => *attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Completion::Succeeded { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentReport {
    pub api_id: String,
    pub region: String,
    pub schema_chars: usize,
    pub completion: Completion,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl DeploymentReport {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_state_vocabulary() {
        assert_eq!(RemoteState::parse("PROCESSING"), RemoteState::Pending);
        assert_eq!(RemoteState::parse("PENDING"), RemoteState::Pending);
        assert_eq!(RemoteState::parse("SUCCESS"), RemoteState::Succeeded);
        assert_eq!(RemoteState::parse("FAILED"), RemoteState::Failed);
        assert_eq!(
            RemoteState::parse("DELETING"),
            RemoteState::Unrecognized("DELETING".to_string())
        );
        assert_eq!(
            RemoteState::parse("ACTIVE"),
            RemoteState::Unrecognized("ACTIVE".to_string())
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!DeploymentStatus::Processing.is_terminal());
        assert!(DeploymentStatus::Succeeded.is_terminal());
        assert!(DeploymentStatus::Failed { details: None }.is_terminal());
    }
}
