mod data_url;
mod model;
mod result;
mod session;
mod upload;

pub use data_url::{DataUrl, DataUrlError, FALLBACK_MIME, sniff_mime};
pub use model::{DetectionModel, ModelInfo, ResultShape};
pub use result::{BoundingBox, DetectionKind, DetectionResult, confidence_percent};
pub use session::{Phase, SCAN_STEP, Session, View};
pub use upload::{DetectionRequest, UploadedImage};
