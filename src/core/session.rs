use tracing::{debug, error, info, warn};

use crate::core::{DetectionModel, DetectionRequest, DetectionResult, UploadedImage};

/// Step of the scanning animation, in percent per tick.
pub const SCAN_STEP: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Analyzing,
    Showing(DetectionResult),
}

/// Which layout the window shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    NoImage,
    ImageLoaded,
    Analyzing,
    ResultShown,
}

/// The controller state behind the window: one image, one selected model,
/// at most one analysis in flight.
#[derive(Debug, Clone)]
pub struct Session {
    image: Option<UploadedImage>,
    model: DetectionModel,
    phase: Phase,
    scan_progress: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            image: None,
            model: DetectionModel::default(),
            phase: Phase::Idle,
            scan_progress: 0,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn model(&self) -> DetectionModel {
        self.model
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.phase {
            Phase::Showing(result) => Some(result),
            _ => None,
        }
    }

    pub fn scan_progress(&self) -> u8 {
        self.scan_progress
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing)
    }

    pub fn view(&self) -> View {
        match (&self.image, &self.phase) {
            (None, _) => View::NoImage,
            (Some(_), Phase::Idle) => View::ImageLoaded,
            (Some(_), Phase::Analyzing) => View::Analyzing,
            (Some(_), Phase::Showing(_)) => View::ResultShown,
        }
    }

    /// Replace the current image. Any previous result goes away with it.
    pub fn load_image(&mut self, image: UploadedImage) {
        if self.is_analyzing() {
            warn!("Ignoring new image while an analysis is running");
            return;
        }
        info!(file = %image.file_name, mime = image.data_url.mime(), "Image loaded");
        self.image = Some(image);
        self.phase = Phase::Idle;
    }

    /// Discard image and result, back to the initial state.
    pub fn remove_image(&mut self) {
        if self.is_analyzing() {
            warn!("Ignoring remove while an analysis is running");
            return;
        }
        self.image = None;
        self.phase = Phase::Idle;
    }

    pub fn select_model(&mut self, model: DetectionModel) {
        self.model = model;
    }

    pub fn can_detect(&self) -> bool {
        self.image.is_some() && matches!(self.phase, Phase::Idle) && self.model.is_available()
    }

    /// Start an analysis if the detect control is enabled.
    /// Returns the request to send; the caller sends exactly this one.
    pub fn begin_detection(&mut self) -> Option<DetectionRequest> {
        if !self.can_detect() {
            return None;
        }
        let image = self.image.as_ref()?;
        match DetectionRequest::new(self.model, image) {
            Ok(request) => {
                debug!(request_id = %request.id, model = %self.model, "Starting detection");
                self.phase = Phase::Analyzing;
                self.scan_progress = 0;
                Some(request)
            }
            Err(e) => {
                error!("Error preparing detection request: {e}");
                None
            }
        }
    }

    /// Advance the scanning animation. No-op unless analyzing.
    pub fn tick(&mut self) {
        if !self.is_analyzing() {
            return;
        }
        self.scan_progress = if self.scan_progress >= 100 {
            0
        } else {
            self.scan_progress + SCAN_STEP
        };
    }

    /// Settle the in-flight analysis. A failure leaves the image on screen
    /// and re-enables the detect control.
    pub fn finish<E: std::fmt::Display>(&mut self, outcome: Result<DetectionResult, E>) {
        if !self.is_analyzing() {
            debug!("Dropping detection outcome that arrived outside of an analysis");
            return;
        }
        self.scan_progress = 0;
        self.phase = match outcome {
            Ok(result) => {
                info!(model = %result.model, confidence = result.confidence, "Detection finished");
                Phase::Showing(result)
            }
            Err(e) => {
                error!("Error during detection: {e}");
                Phase::Idle
            }
        };
    }

    /// Leave the result panel, keeping the image for another run.
    pub fn back_to_detection(&mut self) {
        if let Phase::Showing(_) = self.phase {
            self.phase = Phase::Idle;
        }
    }

    pub fn detect_label(&self) -> String {
        if self.is_analyzing() {
            "Analyzing...".to_string()
        } else if self.model.is_available() {
            format!("Detect Tumor with {}", self.model.wire_name())
        } else {
            format!("{} Coming Soon", self.model.wire_name())
        }
    }
}
