//! Builder for creating and configuring ApiClient instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use super::ApiClient;
use crate::{
    config::ClientConfig,
    error::Result,
    transport::{HttpTransport, Transport},
};

/// Builder for creating and configuring ApiClient instances.
#[derive(Clone, Default)]
pub struct ApiClientBuilder {
    overrides: ClientConfig,
    config_file: Option<PathBuf>,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API root, overriding the configuration file.
    pub fn with_api_url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.overrides.api_url = Some(url.into());
        }
        self
    }

    /// Sets the request timeout, overriding the configuration file.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.overrides.timeout_secs = Some(timeout.as_secs());
        }
        self
    }

    /// Sets the display time zone, overriding the configuration file.
    pub fn with_time_zone<S: Into<String>>(mut self, time_zone: Option<S>) -> Self {
        if let Some(time_zone) = time_zone {
            self.overrides.time_zone = Some(time_zone.into());
        }
        self
    }

    /// Reads settings from this file instead of the XDG location.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/airport/config.json` when it
    /// exists.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given transport instead of HTTP.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolves the effective configuration without building a client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if an explicit configuration file
    /// is missing or malformed.
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let file = match &self.config_file {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::load_default()?,
        };
        let config = file.merge(self.overrides.clone());
        // Reject an unknown zone before anything is fetched.
        config.time_zone()?;
        Ok(config)
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the configuration cannot be
    /// resolved or the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient> {
        let config = self.resolve_config()?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(config.api_url(), config.timeout())?),
        };
        Ok(ApiClient::new(transport, config))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"api_url": "http://file/api", "time_zone": "Europe/Prague"}}"#
        )
        .unwrap();

        let config = ApiClientBuilder::new()
            .with_config_file(Some(file.path()))
            .with_api_url(Some("http://flag/api"))
            .with_timeout(Some(Duration::from_secs(3)))
            .resolve_config()
            .unwrap();

        assert_eq!(config.api_url(), "http://flag/api");
        assert_eq!(config.timeout_secs, Some(3));
        assert_eq!(config.time_zone.as_deref(), Some("Europe/Prague"));
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let result = ApiClientBuilder::new()
            .with_config_file(Some("/nonexistent/airport.json"))
            .build();
        assert!(matches!(result, Err(ClientError::Configuration { .. })));
    }

    #[test]
    fn test_build_http_client() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{}").unwrap();

        let api = ApiClientBuilder::new()
            .with_config_file(Some(file.path()))
            .with_api_url(Some("http://127.0.0.1:8080/pa165/api"))
            .build()
            .unwrap();
        assert_eq!(api.config().api_url(), "http://127.0.0.1:8080/pa165/api");
    }
}
