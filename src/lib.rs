//! Nano Banana - turn an uploaded image into a text-to-image prompt.
//!
//! A small local web app: upload an image, pick one of four styles and ask
//! Gemini for a prompt describing it.
//!
//! ```no_run
//! use nano_banana::{router, AppState, Config, GeminiPromptGenerator, SystemClipboard};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default().with_api_key("...");
//!     let bind = config.bind;
//!     let state = AppState::new(
//!         Arc::new(GeminiPromptGenerator::new(config)),
//!         Arc::new(SystemClipboard),
//!     );
//!     let listener = tokio::net::TcpListener::bind(bind).await?;
//!     axum::serve(listener, router(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod gemini;
pub mod preview;
pub mod prompt;
pub mod server;
pub mod service;
pub mod style;
pub mod ui;
pub mod upload;

pub use config::Config;
pub use controller::{run_generation, Controller, Outcome, Phase, PhaseKind, View};
pub use display::{copy_to_clipboard, Clipboard, CopyIndicator, SystemClipboard, COPY_FEEDBACK};
pub use error::{ClipboardError, PromptError, ServiceFailure, UploadError};
pub use gemini::GeminiPromptGenerator;
pub use preview::PreviewStore;
pub use server::{router, AppState};
pub use service::{GeneratedPrompt, PromptGenerator};
pub use style::Style;
pub use upload::{ImageInput, UploadedFile};
