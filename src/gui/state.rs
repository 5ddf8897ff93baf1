use iced::widget::image::Handle;
use tracing::error;

use crate::core::{DataUrl, DetectionKind, DetectionResult, Session, UploadedImage};

/// Decoded image handles for whatever the session currently shows.
/// Rebuilt only when the session's image or result changes.
#[derive(Debug, Default)]
pub struct ImageHandles {
    pub uploaded: Option<Handle>,
    pub original: Option<Handle>,
    pub overlay: Option<Handle>,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: Session,
    pub handles: ImageHandles,
}

impl AppState {
    pub fn load_image(&mut self, image: UploadedImage) {
        self.session.load_image(image);
        self.refresh_handles();
    }

    pub fn remove_image(&mut self) {
        self.session.remove_image();
        self.refresh_handles();
    }

    pub fn finish<E: std::fmt::Display>(&mut self, outcome: Result<DetectionResult, E>) {
        self.session.finish(outcome);
        self.refresh_handles();
    }

    pub fn back_to_detection(&mut self) {
        self.session.back_to_detection();
        self.refresh_handles();
    }

    fn refresh_handles(&mut self) {
        self.handles.uploaded = self.session.image().and_then(|image| handle(&image.data_url));
        (self.handles.original, self.handles.overlay) = match self.session.result().map(|r| &r.kind) {
            Some(DetectionKind::Heatmap { original, overlay }) => (handle(original), handle(overlay)),
            _ => (None, None),
        };
    }
}

fn handle(url: &DataUrl) -> Option<Handle> {
    match url.decode() {
        Ok(bytes) => Some(Handle::from_bytes(bytes)),
        Err(e) => {
            error!("Error decoding image for display: {e}");
            None
        }
    }
}
