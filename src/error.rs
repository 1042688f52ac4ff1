//! Error types for uploads, prompt generation and the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Message shown whenever the generative service fails for any reason.
pub const GENERATION_FAILED: &str =
    "Failed to generate prompt. The AI model might be unavailable or the image could not be processed.";

/// Message shown when a non-image file is submitted.
pub const NOT_AN_IMAGE: &str = "Please upload a valid image file.";

/// Errors surfaced by a prompt generator to its caller.
///
/// `Display` is the text shown on the page; every variant renders a fixed,
/// non-empty message.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// A required setting is missing. Raised before any network I/O.
    #[error("{0} is not configured. Set it in the environment or .env file.")]
    NotConfigured(&'static str),

    /// The service call failed or produced no text.
    #[error("{}", GENERATION_FAILED)]
    Generation(#[source] ServiceFailure),
}

/// Underlying cause of a failed service call. Logged, never shown to users.
#[derive(Debug, thiserror::Error)]
pub enum ServiceFailure {
    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Prompt or candidate was blocked by safety filters.
    #[error("content blocked: {0}")]
    Blocked(String),

    /// The response carried no text.
    #[error("the model returned no text")]
    EmptyText,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ServiceFailure> for PromptError {
    fn from(failure: ServiceFailure) -> Self {
        Self::Generation(failure)
    }
}

/// Rejections raised while accepting an upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Declared content type does not start with `image/`.
    #[error("{}", NOT_AN_IMAGE)]
    NotAnImage { content_type: String },

    /// The multipart body could not be read.
    #[error("could not read upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// The form carried no file field.
    #[error("no file was provided")]
    MissingFile,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotAnImage { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Multipart(_) | Self::MissingFile => StatusCode::BAD_REQUEST,
        };
        error_response(status, self.to_string())
    }
}

/// Failure to write to the system clipboard.
#[derive(Debug, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Builds the `{"error": ...}` body used by every failing route.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_names_the_variable() {
        let err = PromptError::NotConfigured("GEMINI_API_KEY");
        assert!(err.to_string().starts_with("GEMINI_API_KEY is not configured"));
    }

    #[test]
    fn test_generation_hides_the_cause() {
        let err = PromptError::from(ServiceFailure::Api {
            status: 500,
            message: "internal stack trace".into(),
        });
        assert_eq!(err.to_string(), GENERATION_FAILED);
        assert!(!err.to_string().contains("stack trace"));

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("API error: 500 - internal stack trace")
        );
    }

    #[test]
    fn test_empty_text_uses_generic_message() {
        let err = PromptError::from(ServiceFailure::EmptyText);
        assert_eq!(err.to_string(), GENERATION_FAILED);
    }

    #[test]
    fn test_every_prompt_error_has_text() {
        let errors = [
            PromptError::NotConfigured(""),
            PromptError::from(ServiceFailure::EmptyText),
            PromptError::from(ServiceFailure::Blocked(String::new())),
            PromptError::from(ServiceFailure::Api {
                status: 500,
                message: String::new(),
            }),
        ];
        for err in errors {
            assert!(!err.to_string().trim().is_empty(), "{err:?}");
        }
    }

    #[test]
    fn test_upload_status_codes() {
        let resp = UploadError::NotAnImage {
            content_type: "application/pdf".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let resp = UploadError::MissingFile.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
