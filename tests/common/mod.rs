#![allow(dead_code)]

use async_trait::async_trait;
use schema_deployer::core::{SchemaService, StatusReport};
use schema_deployer::{DeployError, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// In-memory schema service that replays a fixed list of poll replies.
/// Once the script runs out every poll reports PROCESSING.
#[derive(Clone, Default)]
pub struct ScriptedService {
    replies: Arc<Mutex<VecDeque<Result<StatusReport>>>>,
    submissions: Arc<Mutex<Vec<(String, String)>>>,
    polls: Arc<Mutex<u32>>,
    reject_submission: Option<String>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(statuses: &[&str]) -> Self {
        let service = Self::new();
        for status in statuses {
            service.push_status(status, None);
        }
        service
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_submission: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn push_status(&self, status: &str, details: Option<&str>) {
        self.replies.lock().unwrap().push_back(Ok(StatusReport {
            status: status.to_string(),
            details: details.map(str::to_string),
        }));
    }

    pub fn push_error(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(DeployError::PollError {
                message: message.to_string(),
            }));
    }

    pub fn polls(&self) -> u32 {
        *self.polls.lock().unwrap()
    }

    pub fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchemaService for ScriptedService {
    async fn start_schema_creation(&self, api_id: &str, definition: &str) -> Result<Option<String>> {
        if let Some(message) = &self.reject_submission {
            return Err(DeployError::SubmissionError {
                message: message.clone(),
            });
        }
        self.submissions
            .lock()
            .unwrap()
            .push((api_id.to_string(), definition.to_string()));
        Ok(Some("PROCESSING".to_string()))
    }

    async fn get_schema_creation_status(&self, _api_id: &str) -> Result<StatusReport> {
        *self.polls.lock().unwrap() += 1;
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(StatusReport {
                status: "PROCESSING".to_string(),
                details: None,
            })
        })
    }
}
