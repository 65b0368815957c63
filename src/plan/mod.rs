//! Plan request adapter: profile in, typed plan out.
//!
//! [`ModelPlanProvider`] turns a [`UserProfile`] into one structured-output
//! request against a [`ModelProvider`], then parses the reply. There are no
//! retries and no streaming. A transport failure is returned unchanged. A
//! reply cut off by the token limit or a content filter becomes
//! [`FitError::Truncated`], and any other reply without a usable plan becomes
//! [`FitError::EmptyResponse`] or [`FitError::Parse`].

pub mod parse;
pub mod prompt;
pub mod schema;

pub use parse::parse_plan;
pub use prompt::build_prompt;
pub use schema::plan_response_schema;

use async_trait::async_trait;
use tracing::debug;

use crate::error::FitError;
use crate::provider::{ModelProvider, ProviderRequest};
use crate::types::{GeneratedPlan, ResponseSchema, UserProfile};

/// Anything that can turn a profile into a plan.
#[async_trait]
pub trait PlanProvider: Send + Sync {
    async fn generate_plan(&self, profile: &UserProfile) -> Result<GeneratedPlan, FitError>;
}

/// [`PlanProvider`] backed by a remote language model.
pub struct ModelPlanProvider<P> {
    provider: P,
}

impl<P: ModelProvider> ModelPlanProvider<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The exact request sent for `profile`.
    pub fn build_request(profile: &UserProfile) -> ProviderRequest {
        let mut request = ProviderRequest::new(build_prompt(profile));
        request.response_schema = Some(ResponseSchema {
            schema: plan_response_schema(),
            name: schema::PLAN_SCHEMA_NAME.to_string(),
        });
        request
    }
}

#[async_trait]
impl<P: ModelProvider> PlanProvider for ModelPlanProvider<P> {
    async fn generate_plan(&self, profile: &UserProfile) -> Result<GeneratedPlan, FitError> {
        let request = Self::build_request(profile);
        debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_id(),
            "Requesting plan"
        );
        let response = self.provider.generate_text(&request).await?;
        if let Some(reason) = response.finish_reason.filter(|r| !r.is_complete()) {
            return Err(FitError::Truncated(reason));
        }
        parse_plan(&response.text)
    }
}
