use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read schema file {path}: {message}")]
    SchemaFileError { path: String, message: String },

    #[error("Failed to process {path}: {message}")]
    FileError { path: String, message: String },

    #[error("Schema submission failed: {message}")]
    SubmissionError { message: String },

    #[error("Status poll failed: {message}")]
    PollError { message: String },

    #[error("Deployment timed out after {attempts} attempts")]
    Timeout {
        attempts: u32,
        last_error: Option<String>,
    },

    #[error("Schema deployment failed: {details}")]
    DeploymentFailed { details: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Remote,
    Deployment,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DeployError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::ConfigError { .. }
            | DeployError::MissingConfigError { .. }
            | DeployError::InvalidConfigValueError { .. }
            | DeployError::SchemaFileError { .. }
            | DeployError::TomlError(_)
            | DeployError::SerializationError(_) => ErrorCategory::Configuration,
            DeployError::SubmissionError { .. } | DeployError::PollError { .. } => {
                ErrorCategory::Remote
            }
            DeployError::Timeout { .. } | DeployError::DeploymentFailed { .. } => {
                ErrorCategory::Deployment
            }
            DeployError::IoError(_) | DeployError::FileError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DeployError::Timeout { .. } | DeployError::PollError { .. } => ErrorSeverity::Medium,
            DeployError::SubmissionError { .. } | DeployError::DeploymentFailed { .. } => {
                ErrorSeverity::High
            }
            _ => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeployError::ConfigError { message } => format!("Configuration problem: {}", message),
            DeployError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            DeployError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DeployError::SchemaFileError { path, .. } => {
                format!("Could not read schema file '{}'", path)
            }
            DeployError::SubmissionError { message } => {
                format!("AppSync rejected the schema upload: {}", message)
            }
            DeployError::PollError { message } => {
                format!("Could not query deployment status: {}", message)
            }
            DeployError::Timeout { attempts, .. } => {
                format!("Deployment timed out after {} attempts", attempts)
            }
            DeployError::DeploymentFailed { details } => {
                format!("Schema deployment failed: {}", details)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check appsync-config.json (ApiId, Region) and the schema file path".to_string()
            }
            ErrorCategory::Remote => {
                "Check AWS credentials, network access and that the API id exists in this region"
                    .to_string()
            }
            ErrorCategory::Deployment => match self {
                DeployError::Timeout { .. } => {
                    "Inspect the API in the AppSync console or raise --max-attempts".to_string()
                }
                _ => "Fix the schema errors reported above and deploy again".to_string(),
            },
            ErrorCategory::System => "Check file permissions and available disk space".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
