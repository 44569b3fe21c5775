use crate::core::poller::{PollSettings, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL};
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "appsync-config.json";
pub const DEFAULT_SCHEMA_PATH: &str = "schema.graphql";

/// On-disk deployment settings (`appsync-config.json` or a `.toml` equivalent).
/// Every field is optional so command-line flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileConfig {
    pub api_id: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub schema_path: Option<String>,
    pub interval_seconds: Option<u64>,
    pub max_attempts: Option<u32>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DeployError::ConfigError {
            message: format!("failed to load {}: {}", path.display(), e),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(serde_json::from_str(&processed)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Values set in `overrides` win over values in `self`.
    pub fn overlay(self, overrides: FileConfig) -> FileConfig {
        FileConfig {
            api_id: overrides.api_id.or(self.api_id),
            region: overrides.region.or(self.region),
            endpoint_url: overrides.endpoint_url.or(self.endpoint_url),
            schema_path: overrides.schema_path.or(self.schema_path),
            interval_seconds: overrides.interval_seconds.or(self.interval_seconds),
            max_attempts: overrides.max_attempts.or(self.max_attempts),
        }
    }
}

/// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeployError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

/// Fully resolved settings for one deployment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub api_id: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub schema_path: String,
    pub poll: PollSettings,
}

impl TryFrom<FileConfig> for DeployConfig {
    type Error = DeployError;

    fn try_from(file: FileConfig) -> Result<Self> {
        let api_id = validation::validate_required_field("ApiId", &file.api_id)?.clone();
        let region = validation::validate_required_field("Region", &file.region)?.clone();

        Ok(Self {
            api_id,
            region,
            endpoint_url: file.endpoint_url,
            schema_path: file
                .schema_path
                .unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
            poll: PollSettings {
                interval: file
                    .interval_seconds
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_POLL_INTERVAL),
                max_attempts: file.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            },
        })
    }
}

impl Validate for DeployConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("ApiId", &self.api_id)?;
        validation::validate_aws_region("Region", &self.region)?;
        if let Some(endpoint) = &self.endpoint_url {
            validation::validate_url("EndpointUrl", endpoint)?;
        }
        validation::validate_path("SchemaPath", &self.schema_path)?;
        validation::validate_range("MaxAttempts", self.poll.max_attempts, 1, 10_000)?;
        validation::validate_range("IntervalSeconds", self.poll.interval.as_secs(), 0, 300)?;

        tracing::debug!("✅ Deployment configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_appsync_json() {
        let config = FileConfig::from_json_str(
            r#"{ "ApiId": "abc123xyz", "Region": "us-east-1" }"#,
        )
        .unwrap();

        assert_eq!(config.api_id.as_deref(), Some("abc123xyz"));
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.max_attempts, None);
    }

    #[test]
    fn test_parse_toml_with_polling() {
        let config = FileConfig::from_toml_str(
            r#"
ApiId = "abc123xyz"
Region = "eu-west-1"
IntervalSeconds = 5
MaxAttempts = 12
"#,
        )
        .unwrap();

        let resolved = DeployConfig::try_from(config).unwrap();
        assert_eq!(resolved.poll.interval, Duration::from_secs(5));
        assert_eq!(resolved.poll.max_attempts, 12);
        assert_eq!(resolved.schema_path, DEFAULT_SCHEMA_PATH);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_APPSYNC_API_ID", "from-env");

        let config =
            FileConfig::from_json_str(r#"{ "ApiId": "${TEST_APPSYNC_API_ID}", "Region": "us-east-1" }"#)
                .unwrap();
        assert_eq!(config.api_id.as_deref(), Some("from-env"));

        std::env::remove_var("TEST_APPSYNC_API_ID");
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let file = FileConfig {
            api_id: Some("file-api".to_string()),
            region: Some("us-east-1".to_string()),
            max_attempts: Some(10),
            ..Default::default()
        };
        let flags = FileConfig {
            region: Some("af-south-1".to_string()),
            ..Default::default()
        };

        let merged = file.overlay(flags);
        assert_eq!(merged.api_id.as_deref(), Some("file-api"));
        assert_eq!(merged.region.as_deref(), Some("af-south-1"));
        assert_eq!(merged.max_attempts, Some(10));
    }

    #[test]
    fn test_missing_api_id() {
        let file = FileConfig {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            DeployConfig::try_from(file),
            Err(DeployError::MissingConfigError { field }) if field == "ApiId"
        ));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = DeployConfig::try_from(FileConfig {
            api_id: Some("abc".to_string()),
            region: Some("us-east-1".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(config.validate().is_ok());

        config.endpoint_url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.endpoint_url = None;
        config.poll.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        temp_file
            .write_all(br#"{ "ApiId": "file-test", "Region": "us-west-2", "SchemaPath": "api/schema.graphql" }"#)
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_id.as_deref(), Some("file-test"));
        assert_eq!(config.schema_path.as_deref(), Some("api/schema.graphql"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = FileConfig::from_file("/definitely/not/here/appsync-config.json").unwrap_err();
        assert!(matches!(err, DeployError::ConfigError { .. }));
    }
}
