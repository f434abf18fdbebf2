//! HTTP client for the generation API.
//!
//! One `POST` per request, JSON in and out. No retries and no timeout: a
//! failed call is reported once and the user decides whether to try again.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::types::GenerationRequest;
use crate::error::{Error, Result};
use crate::remote::Generator;
use crate::remote::types::{GENERIC_FAILURE, GenerationResponse, error_message, parse_success};

/// [`Generator`] backed by the remote HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerator {
    /// Creates a client for the API at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = reqwest::Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid API endpoint {endpoint}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API endpoint must be http or https, got {}",
                url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("kavya/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "generation response received");

        let payload: Option<Value> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let message = payload
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(Error::Remote {
                status: Some(status.as_u16()),
                message,
            });
        }

        match payload {
            Some(payload) => parse_success(status.as_u16(), &payload),
            None => Err(Error::Remote {
                status: Some(status.as_u16()),
                message: GENERIC_FAILURE.to_string(),
            }),
        }
    }
}
