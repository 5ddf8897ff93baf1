pub mod client;
pub mod config;
pub mod core;
pub mod render;

pub use client::{ClientError, InferenceService, PredictClient, analyze};
pub use config::Settings;
pub use crate::core::{
    BoundingBox, DataUrl, DetectionKind, DetectionModel, DetectionRequest, DetectionResult,
    Session, UploadedImage, View,
};

#[cfg(feature = "gui")]
pub mod gui;
