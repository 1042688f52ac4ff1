//! The seam between the application and whatever model writes the prompt.

use crate::error::PromptError;
use crate::style::Style;
use crate::upload::ImageInput;
use async_trait::async_trait;
use serde::Serialize;

/// Text returned by a generator, with where and how long it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPrompt {
    pub text: String,
    pub model: String,
    pub elapsed_ms: u64,
}

impl GeneratedPrompt {
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            elapsed_ms: 0,
        }
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }
}

/// Turns an image and a style into a descriptive prompt.
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    /// Generates a prompt for `image` in `style`.
    ///
    /// Runs to completion or failure; there is no retry and no cancellation.
    async fn generate(&self, image: &ImageInput, style: Style)
        -> Result<GeneratedPrompt, PromptError>;

    /// Whether a request could be attempted at all.
    fn is_configured(&self) -> bool {
        true
    }
}
