use std::{path::PathBuf, sync::Arc};

use crate::{
    client::ClientError,
    core::{DetectionModel, DetectionResult, UploadedImage},
};

#[derive(Debug, Clone)]
pub enum Message {
    PickImage,
    FilePicked(Option<PathBuf>),
    FileDropped(PathBuf),
    ImageLoaded(Result<UploadedImage, String>),
    RemoveImage,
    SelectModel(DetectionModel),
    Detect,
    DetectionFinished(Result<DetectionResult, Arc<ClientError>>),
    BackToDetection,
    ScanTick,
}
