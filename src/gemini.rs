//! Google Gemini backed prompt generator.

use crate::config::Config;
use crate::error::{PromptError, ServiceFailure};
use crate::prompt;
use crate::service::{GeneratedPrompt, PromptGenerator};
use crate::style::Style;
use crate::upload::ImageInput;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{error, info};

/// Longest slice of an error body kept for logging.
const MAX_ERROR_BODY: usize = 500;

/// Calls `generateContent` with the image and the style instruction.
pub struct GeminiPromptGenerator {
    client: reqwest::Client,
    config: Config,
}

impl GeminiPromptGenerator {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
        )
    }

    async fn call(
        &self,
        api_key: &str,
        body: &GeminiRequest,
    ) -> Result<String, ServiceFailure> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ServiceFailure::Api {
                status: status.as_u16(),
                message: truncate(&text, MAX_ERROR_BODY).to_string(),
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)?;
        parsed.into_text()
    }
}

#[async_trait]
impl PromptGenerator for GeminiPromptGenerator {
    async fn generate(
        &self,
        image: &ImageInput,
        style: Style,
    ) -> Result<GeneratedPrompt, PromptError> {
        let api_key = self.config.require_api_key()?;
        let start = Instant::now();

        let body = GeminiRequest::new(image, style);

        info!(
            model = %self.config.model,
            style = %style,
            mime_type = %image.mime_type,
            bytes = image.bytes.len(),
            "requesting prompt from Gemini"
        );

        match self.call(api_key, &body).await {
            Ok(text) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                info!(elapsed_ms, chars = text.len(), "prompt generated");
                Ok(GeneratedPrompt::new(text, self.config.model.clone())
                    .with_elapsed_ms(elapsed_ms))
            }
            Err(failure) => {
                error!("error generating prompt from Gemini: {failure}");
                Err(PromptError::Generation(failure))
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}

fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// Request/Response types
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiRequestPart>,
}

/// A part in a Gemini request - inline image data or text.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiRequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

impl GeminiRequest {
    fn new(image: &ImageInput, style: Style) -> Self {
        let inline = image.to_inline();
        let parts = vec![
            GeminiRequestPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: inline.mime_type,
                    data: inline.data,
                },
            },
            GeminiRequestPart::Text {
                text: prompt::instruction(style),
            },
        ];

        Self {
            contents: vec![GeminiContent { parts }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Result<String, ServiceFailure> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ServiceFailure::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(ServiceFailure::EmptyText)?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }

        match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST" | "RECITATION")) => {
                Err(ServiceFailure::Blocked(reason.to_string()))
            }
            _ => Err(ServiceFailure::EmptyText),
        }
    }
}
