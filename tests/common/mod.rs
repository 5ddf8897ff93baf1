mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from neurovision for tests
pub use neurovision::{
    BoundingBox, ClientError, DataUrl, DetectionKind, DetectionModel, DetectionRequest,
    DetectionResult, InferenceService, PredictClient, Session, UploadedImage, View, analyze,
};
