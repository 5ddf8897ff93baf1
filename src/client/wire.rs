use serde::Deserialize;

use crate::client::ClientError;
use crate::core::{BoundingBox, DataUrl, DetectionModel, DetectionResult, ModelInfo, ResultShape};

/// The service encodes both images as PNG.
const SERVICE_IMAGE_MIME: &str = "image/png";

/// JSON body of `POST /predict`. Which fields are present depends on the model.
/// Anything else the service sends (such as its own `prediction` flag) is skipped.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub confidence: f32,
    pub bounding_boxes: Option<Vec<BoundingBox>>,
    pub original_image: Option<String>,
    pub overlay_image: Option<String>,
}

impl PredictResponse {
    /// Shape the response according to the model that was asked for.
    pub fn into_result(self, model: DetectionModel) -> Result<DetectionResult, ClientError> {
        match model.result_shape() {
            ResultShape::BoundingBoxes => Ok(DetectionResult::bounding_boxes(
                model,
                self.confidence,
                self.bounding_boxes.unwrap_or_default(),
            )),
            ResultShape::Heatmap => {
                let original = self
                    .original_image
                    .ok_or(ClientError::MissingField("original_image"))?;
                let overlay = self
                    .overlay_image
                    .ok_or(ClientError::MissingField("overlay_image"))?;
                Ok(DetectionResult::heatmap(
                    model,
                    self.confidence,
                    DataUrl::from_base64(SERVICE_IMAGE_MIME, &original),
                    DataUrl::from_base64(SERVICE_IMAGE_MIME, &overlay),
                ))
            }
        }
    }
}

/// JSON body of `GET /models`.
#[derive(Debug, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}
