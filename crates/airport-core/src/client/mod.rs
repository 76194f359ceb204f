//! REST client for the back office API.
//!
//! [`ApiClient`] is the entry point: it owns the [`Transport`] and hands out
//! typed adapters for each endpoint family.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controllers   │    │    ApiClient    │    │    Transport    │
//! │  (view-models)  │───▶│  Resources<R>,  │───▶│ (HTTP / fake)   │
//! │                 │    │  relationships  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory resolving configuration into an [`ApiClient`]
//! - [`resource`]: Generic list/get/create/update/delete adapter
//! - [`relations`]: Flight sub-resources of stewards and destinations
//! - [`envelope`]: HAL `_embedded` unwrapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use airport_core::{models::Steward, ApiClientBuilder};
//!
//! # async fn example() -> Result<(), airport_core::ClientError> {
//! let api = ApiClientBuilder::new()
//!     .with_api_url(Some("http://localhost:8080/pa165/api"))
//!     .build()?;
//!
//! let stewards = api.resources::<Steward>().list().await?;
//! for steward in &stewards {
//!     println!("{}", steward.full_name());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::warn;

use crate::{
    config::ClientConfig,
    error::{Result, ServerError},
    models::{ErrorBody, ErrorCode, Resource},
    transport::{ApiRequest, ApiResponse, Transport},
};

pub mod builder;
pub mod envelope;
pub mod relations;
pub mod resource;

pub use builder::ApiClientBuilder;
pub use resource::Resources;

/// Cloneable handle to the back office API.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Creates a client over an already configured transport.
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    /// Configuration the client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Typed adapter for resource type `R`.
    pub fn resources<R: Resource>(&self) -> Resources<R> {
        Resources::new(self.clone())
    }

    /// Sends a request and returns the body of a 2xx response; any other
    /// status is decoded into the error taxonomy.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<String> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response.body);
        }

        let error = decode_error(&response);
        warn!("{method} {path} rejected: {error}");
        Err(error.into_client_error())
    }
}

/// Decodes the `{code, message}` envelope; bodies that do not carry one keep
/// the raw text as the message.
fn decode_error(response: &ApiResponse) -> ServerError {
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) if !body.code.is_empty() => ServerError::new(
            response.status,
            ErrorCode::from(body.code.as_str()),
            body.message,
        ),
        _ => ServerError::new(
            response.status,
            ErrorCode::Other(format!("HTTP {}", response.status)),
            response.body.trim(),
        ),
    }
}
