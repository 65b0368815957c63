//! Model provider trait and the Gemini transport.

pub mod http;

#[cfg(feature = "google")]
pub mod google;

use async_trait::async_trait;

use crate::config::FitConfig;
use crate::error::FitError;
use crate::types::{FinishReason, ResponseSchema};

/// A single-turn request sent to a model provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub prompt: String,
    /// When set, the reply must be JSON matching this schema.
    pub response_schema: Option<ResponseSchema>,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }
}

/// Response from a provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderResponse {
    /// Concatenated text of the reply; empty when the model produced none.
    pub text: String,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by remote model transports.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate text (non-streaming).
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, FitError>;
}

#[async_trait]
impl ModelProvider for Box<dyn ModelProvider> {
    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, FitError> {
        (**self).generate_text(request).await
    }
}

/// Create the configured provider.
#[cfg(feature = "google")]
pub fn create_provider(config: &FitConfig) -> Result<Box<dyn ModelProvider>, FitError> {
    let api_key = config.api_key().ok_or_else(|| {
        FitError::Configuration(
            "Missing API key (set GEMINI_API_KEY, GOOGLE_API_KEY or API_KEY)".into(),
        )
    })?;
    Ok(Box::new(google::GoogleProvider::new(
        config.model().to_string(),
        api_key.to_string(),
        config.base_url().to_string(),
    )))
}

/// Create the configured provider.
#[cfg(not(feature = "google"))]
pub fn create_provider(_config: &FitConfig) -> Result<Box<dyn ModelProvider>, FitError> {
    Err(FitError::Configuration(
        "No model provider enabled via feature flags".into(),
    ))
}
