//! Application state and the transitions between upload, style, generate
//! and display.

use crate::display::CopyIndicator;
use crate::error::{PromptError, UploadError};
use crate::preview::{PreviewId, PreviewStore};
use crate::service::{GeneratedPrompt, PromptGenerator};
use crate::style::Style;
use crate::upload::{ImageInput, UploadedFile};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// The image currently on screen.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub image: Arc<ImageInput>,
    pub preview: PreviewId,
    pub dimensions: Option<(u32, u32)>,
}

/// How the last request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(GeneratedPrompt),
    Failure(String),
}

/// Where the application is. Loading, result and error are all derived from
/// this, so at most one of them is ever active.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// An image is selected. `in_flight` holds a request started for a
    /// previous image that has not settled yet; no new request may start
    /// until it does.
    Ready {
        image: SelectedImage,
        in_flight: Option<u64>,
    },
    Generating {
        image: SelectedImage,
        request: u64,
    },
    Done {
        image: SelectedImage,
        outcome: Outcome,
    },
}

impl Phase {
    fn image(&self) -> Option<&SelectedImage> {
        match self {
            Self::Idle => None,
            Self::Ready { image, .. }
            | Self::Generating { image, .. }
            | Self::Done { image, .. } => Some(image),
        }
    }

    /// Id of the request still running, whichever image it was for.
    fn in_flight(&self) -> Option<u64> {
        match self {
            Self::Generating { request, .. } => Some(*request),
            Self::Ready { in_flight, .. } => *in_flight,
            Self::Idle | Self::Done { .. } => None,
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Idle => PhaseKind::Idle,
            Self::Ready { .. } => PhaseKind::Ready,
            Self::Generating { .. } => PhaseKind::Generating,
            Self::Done { .. } => PhaseKind::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Idle,
    Ready,
    Generating,
    Done,
}

/// A request handed out by [`Controller::begin`], to be settled with
/// [`Controller::complete`].
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub id: u64,
    pub image: Arc<ImageInput>,
    pub style: Style,
}

/// Holds everything the page shows.
#[derive(Debug)]
pub struct Controller {
    phase: Phase,
    style: Style,
    previews: PreviewStore,
    copy: CopyIndicator,
    next_request: u64,
}

impl Controller {
    pub fn new(previews: PreviewStore) -> Self {
        Self::with_copy_indicator(previews, CopyIndicator::default())
    }

    pub fn with_copy_indicator(previews: PreviewStore, copy: CopyIndicator) -> Self {
        Self {
            phase: Phase::Idle,
            style: Style::default(),
            previews,
            copy,
            next_request: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// True while any request is running, including one whose image has
    /// since been replaced.
    pub fn is_loading(&self) -> bool {
        self.phase.in_flight().is_some()
    }

    /// Replaces the selected image and clears any result or error.
    ///
    /// A rejected file leaves the state untouched. A request still running
    /// keeps blocking new ones; its result is dropped when it settles.
    pub fn upload(&mut self, file: UploadedFile) -> Result<(), UploadError> {
        let image = ImageInput::accept(file).map_err(|e| {
            if let UploadError::NotAnImage { content_type } = &e {
                warn!(%content_type, "rejected non-image upload");
            }
            e
        })?;

        let preview = self.previews.create(image.mime_type.clone(), &image.bytes);
        let dimensions = image.dimensions();

        if let Some(previous) = self.phase.image() {
            self.previews.revoke(previous.preview);
        }
        let in_flight = self.phase.in_flight();

        info!(
            file_name = %image.file_name,
            mime_type = %image.mime_type,
            bytes = image.bytes.len(),
            "image selected"
        );

        self.phase = Phase::Ready {
            image: SelectedImage {
                image: Arc::new(image),
                preview,
                dimensions,
            },
            in_flight,
        };
        self.copy.reset();
        Ok(())
    }

    pub fn select_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Moves to `Generating` and returns the work to do.
    ///
    /// Returns `None` when there is no image or a request is already in
    /// flight.
    pub fn begin(&mut self) -> Option<PendingRequest> {
        let image = match &self.phase {
            Phase::Ready {
                image,
                in_flight: None,
            }
            | Phase::Done { image, .. } => image.clone(),
            Phase::Idle | Phase::Ready { .. } | Phase::Generating { .. } => return None,
        };

        self.next_request += 1;
        let id = self.next_request;
        let pending = PendingRequest {
            id,
            image: Arc::clone(&image.image),
            style: self.style,
        };

        self.phase = Phase::Generating { image, request: id };
        self.copy.reset();
        Some(pending)
    }

    /// Settles request `id`. Returns false if a newer upload superseded it.
    pub fn complete(&mut self, id: u64, result: Result<GeneratedPrompt, PromptError>) -> bool {
        let image = match &mut self.phase {
            Phase::Generating { image, request } if *request == id => image.clone(),
            Phase::Ready { in_flight, .. } if *in_flight == Some(id) => {
                *in_flight = None;
                return false;
            }
            _ => return false,
        };

        let outcome = match result {
            Ok(prompt) => Outcome::Success(prompt),
            Err(e) => Outcome::Failure(e.to_string()),
        };
        self.phase = Phase::Done { image, outcome };
        true
    }

    /// Text to copy and the indicator to flash, when a result is showing.
    ///
    /// The clipboard write itself happens outside the controller so the
    /// lock is not held across it.
    pub fn copy_target(&self) -> Option<(String, CopyIndicator)> {
        match &self.phase {
            Phase::Done {
                outcome: Outcome::Success(prompt),
                ..
            } => Some((prompt.text.clone(), self.copy.clone())),
            _ => None,
        }
    }

    pub fn view(&self, configured: bool) -> View {
        let image = self.phase.image().map(|selected| ImageView {
            file_name: selected.image.file_name.clone(),
            mime_type: selected.image.mime_type.clone(),
            preview_url: selected.preview.url(),
            width: selected.dimensions.map(|(w, _)| w),
            height: selected.dimensions.map(|(_, h)| h),
        });

        let (result, error) = match &self.phase {
            Phase::Done {
                outcome: Outcome::Success(prompt),
                ..
            } => (Some(prompt.clone()), None),
            Phase::Done {
                outcome: Outcome::Failure(message),
                ..
            } => (None, Some(message.clone())),
            _ => (None, None),
        };

        View {
            phase: self.phase.kind(),
            style: self.style,
            styles: Style::ALL.to_vec(),
            loading: self.is_loading(),
            can_generate: !self.is_loading()
                && matches!(self.phase, Phase::Ready { .. } | Phase::Done { .. }),
            copied: result.is_some() && self.copy.is_copied(),
            image,
            result,
            error,
            configured,
        }
    }
}

/// Drives one generation: begin, call the generator without holding the
/// lock, then settle. Returns false when nothing was triggered.
pub async fn run_generation(
    controller: &Mutex<Controller>,
    generator: &dyn PromptGenerator,
) -> bool {
    let Some(pending) = controller.lock().await.begin() else {
        return false;
    };

    let result = generator.generate(&pending.image, pending.style).await;

    if !controller.lock().await.complete(pending.id, result) {
        info!(request = pending.id, "discarding result for replaced image");
    }
    true
}

/// Serialized snapshot of the controller for the page.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub phase: PhaseKind,
    pub style: Style,
    pub styles: Vec<Style>,
    pub image: Option<ImageView>,
    pub loading: bool,
    pub can_generate: bool,
    pub result: Option<GeneratedPrompt>,
    pub error: Option<String>,
    pub copied: bool,
    pub configured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageView {
    pub file_name: String,
    pub mime_type: String,
    pub preview_url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
