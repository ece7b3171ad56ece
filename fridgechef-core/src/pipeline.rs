//! The recipe generation pipeline.
//!
//! Orchestrates: prompt the generative capability with the user's
//! ingredient text, validate its structured output, then enrich each
//! candidate with a calorie estimate and an image URL. Stateless across
//! invocations; the enrichment loop is sequential within one invocation.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::ai::{AiClient, ChatMessage, ChatRequest};
use crate::calories::CalorieEstimator;
use crate::error::{GenerateError, UpstreamError};
use crate::images::ImageLookup;
use crate::prompts::recipe_generation::{
    render_recipe_generation_prompt, RECIPE_GENERATION_PROMPT_NAME,
};
use crate::schema;
use crate::types::{GenerationRequest, GenerationResult, Recipe};

/// Pipeline tuning knobs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Timeout for the top-level generative call.
    pub generation_timeout: Duration,
    /// Timeout for each per-candidate calorie/image call.
    pub enrichment_timeout: Duration,
    /// Extra attempts for the generative call after a transport failure.
    /// Schema failures are never retried.
    pub generation_retries: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            generation_timeout: Duration::from_secs(60),
            enrichment_timeout: Duration::from_secs(10),
            generation_retries: 1,
        }
    }
}

/// The recipe generation pipeline.
///
/// Depends only on the `AiClient`, `CalorieEstimator` and `ImageLookup`
/// traits, never on concrete providers.
pub struct RecipePipeline {
    ai: Arc<dyn AiClient>,
    calories: Arc<dyn CalorieEstimator>,
    images: Arc<dyn ImageLookup>,
    config: PipelineConfig,
}

impl RecipePipeline {
    pub fn new(
        ai: Arc<dyn AiClient>,
        calories: Arc<dyn CalorieEstimator>,
        images: Arc<dyn ImageLookup>,
    ) -> Self {
        Self {
            ai,
            calories,
            images,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate enriched recipe suggestions from free-text ingredients.
    ///
    /// A blank ingredient list is rejected up front with
    /// `GenerateError::InvalidRequest` rather than being forwarded to the
    /// model. Zero candidates from the model is a valid, empty result.
    ///
    /// Per-candidate enrichment failures degrade gracefully: the affected
    /// field is left as generation produced it (normally absent), a warning
    /// is logged, and the other candidates are untouched. Only the top-level
    /// generative call propagates failure to the caller.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, GenerateError> {
        schema::validate_request(&request).map_err(GenerateError::InvalidRequest)?;

        let prompt = render_recipe_generation_prompt(&request.ingredients);
        let chat_request = ChatRequest {
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: Some(4096),
            temperature: Some(0.7),
            json_response: true,
        };

        let response = self.call_generation(chat_request).await?;

        let mut result = schema::parse_generation_result(&response.content)
            .map_err(GenerateError::InvalidModelOutput)?;

        for recipe in &mut result.recipes {
            self.enrich(recipe).await;
        }

        Ok(result)
    }

    /// Run the generative call with a bounded timeout, retrying transport
    /// failures up to `generation_retries` times.
    async fn call_generation(
        &self,
        request: ChatRequest,
    ) -> Result<crate::ai::ChatResponse, UpstreamError> {
        let mut attempt = 0;
        loop {
            let outcome = timeout(
                self.config.generation_timeout,
                self.ai
                    .complete(RECIPE_GENERATION_PROMPT_NAME, request.clone()),
            )
            .await;

            let error = match outcome {
                Ok(Ok(response)) => return Ok(response),
                Ok(Err(e)) => e,
                Err(_) => UpstreamError::Timeout(self.config.generation_timeout),
            };

            if attempt >= self.config.generation_retries {
                return Err(error);
            }
            attempt += 1;
            tracing::warn!(
                attempt = attempt,
                error = %error,
                "generative call failed, retrying"
            );
        }
    }

    /// Fill `calories` and `image_url` on one candidate.
    ///
    /// The estimator's value overwrites whatever generation produced; the
    /// image URL is only looked up when still absent, so a model that filled
    /// it itself is left untouched.
    async fn enrich(&self, recipe: &mut Recipe) {
        match timeout(
            self.config.enrichment_timeout,
            self.calories.estimate(&recipe.ingredients),
        )
        .await
        {
            Ok(Ok(info)) => recipe.calories = Some(info.calories),
            Ok(Err(e)) => {
                tracing::warn!(recipe = %recipe.name, error = %e, "calorie estimation failed, leaving calories unset");
            }
            Err(_) => {
                tracing::warn!(recipe = %recipe.name, "calorie estimation timed out, leaving calories unset");
            }
        }

        if recipe.image_url.is_none() {
            match timeout(
                self.config.enrichment_timeout,
                self.images.lookup(&recipe.name),
            )
            .await
            {
                Ok(Ok(url)) => recipe.image_url = Some(url),
                Ok(Err(e)) => {
                    tracing::warn!(recipe = %recipe.name, error = %e, "image lookup failed, leaving image unset");
                }
                Err(_) => {
                    tracing::warn!(recipe = %recipe.name, "image lookup timed out, leaving image unset");
                }
            }
        }
    }
}
