mod config;
mod models;

pub use config::Config;

use std::time::Duration;

use crate::gemini::models::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};
use crate::{NudgeAiError, NudgeAiResult, NudgeContext, PromptGenerator, build_prompt};

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> NudgeAiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl PromptGenerator for GeminiClient {
    async fn generate(&self, context: NudgeContext) -> NudgeAiResult<String> {
        if self.api_key.is_empty() {
            return Err(NudgeAiError::Configuration);
        }

        let prompt = build_prompt(&context.client_name, &context.task);

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "Gemini API error");
            return Err(NudgeAiError::Upstream(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<GeminiResponse>(&body).map_err(|error| {
            tracing::error!(%error, %body, "unparseable Gemini response");
            NudgeAiError::InvalidResponse
        })?;

        match parsed.into_text() {
            Some(text) => Ok(text),
            None => {
                tracing::error!(%body, "Gemini response is missing the generated text");
                Err(NudgeAiError::InvalidResponse)
            }
        }
    }
}
