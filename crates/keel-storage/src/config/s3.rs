//! S3-compatible client configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Connection settings for an S3-compatible object store.
///
/// Every field is a pass-through knob for the underlying client. With the
/// `config` feature enabled the struct can be flattened into a `clap` parser,
/// falling back to the usual `AWS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(rename_all = "camelCase")]
pub struct S3Config {
    /// AWS region.
    #[cfg_attr(
        feature = "config",
        arg(long = "s3-region", env = "AWS_REGION", default_value = "us-east-1")
    )]
    #[serde(default = "default_region")]
    pub region: String,

    /// Custom endpoint URL (for S3-compatible storage like MinIO, R2).
    #[cfg_attr(feature = "config", arg(long = "s3-endpoint", env = "AWS_S3_ENDPOINT"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Address buckets by path instead of by host name.
    ///
    /// Disables host-prefix injection, which most local S3 emulators need.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "s3-path-style",
            env = "AWS_S3_HOST_OVERRIDE",
            default_value_t = false
        )
    )]
    #[serde(default)]
    pub force_path_style: bool,

    /// Allow plain HTTP endpoints.
    ///
    /// Implied when `endpoint` starts with `http://`.
    #[cfg_attr(
        feature = "config",
        arg(long = "s3-allow-http", env = "AWS_ALLOW_HTTP", default_value_t = false)
    )]
    #[serde(default)]
    pub allow_http: bool,

    /// Access key ID for static credentials.
    #[cfg_attr(
        feature = "config",
        arg(long = "s3-access-key-id", env = "AWS_ACCESS_KEY_ID", hide_env_values = true)
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    /// Secret access key for static credentials.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "s3-secret-access-key",
            env = "AWS_SECRET_ACCESS_KEY",
            hide_env_values = true
        )
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,

    /// Session token for temporary credentials.
    #[cfg_attr(
        feature = "config",
        arg(long = "s3-session-token", env = "AWS_SESSION_TOKEN", hide_env_values = true)
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl Default for S3Config {
    fn default() -> Self {
        Self::new(default_region())
    }
}

impl S3Config {
    /// Creates a new S3 configuration for `region`.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
            force_path_style: false,
            allow_http: false,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
        }
    }

    /// Sets the custom endpoint (for S3-compatible storage).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Enables or disables path-style bucket addressing.
    pub fn with_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Sets static access credentials.
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Whether the client may talk plain HTTP to the endpoint.
    pub fn allows_http(&self) -> bool {
        self.allow_http
            || self
                .endpoint
                .as_deref()
                .is_some_and(|endpoint| endpoint.starts_with("http://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = S3Config::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.endpoint.is_none());
        assert!(!config.force_path_style);
        assert!(!config.allows_http());
    }

    #[test]
    fn http_endpoint_implies_allow_http() {
        let config = S3Config::default().with_endpoint("http://localhost:9000");
        assert!(config.allows_http());

        let config = S3Config::default().with_endpoint("https://s3.example.com");
        assert!(!config.allows_http());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let config: S3Config = serde_json::from_str(
            r#"{"endpoint":"http://localhost:4566","forcePathStyle":true}"#,
        )
        .unwrap();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566"));
        assert!(config.force_path_style);
        assert!(config.access_key_id.is_none());
    }
}
