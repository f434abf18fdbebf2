//! The remote text-generation API.

pub mod client;
pub mod types;

use crate::core::types::GenerationRequest;
use crate::error::Result;
use async_trait::async_trait;

pub use client::HttpGenerator;
pub use types::GenerationResponse;

/// Something that turns a request into generated text.
///
/// Implementations report every failure (transport, HTTP status,
/// `success: false`) as an error; the controller decides what the user sees.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate content for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports a failure.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}
