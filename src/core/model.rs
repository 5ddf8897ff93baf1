use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The two detection models the inference service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionModel {
    /// Object detector returning bounding boxes. Not served yet.
    #[default]
    Yolo,
    /// Classifier returning a Grad-CAM heatmap.
    Vgg16,
}

/// What the service sends back for a given model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    BoundingBoxes,
    Heatmap,
}

impl DetectionModel {
    pub const ALL: [DetectionModel; 2] = [DetectionModel::Yolo, DetectionModel::Vgg16];

    /// Value sent in the `model_name` multipart field.
    pub fn wire_name(self) -> &'static str {
        match self {
            DetectionModel::Yolo => "YOLOv12",
            DetectionModel::Vgg16 => "VGG16",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DetectionModel::Yolo => "YOLOv12 Model",
            DetectionModel::Vgg16 => "VGG16 Model",
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, DetectionModel::Vgg16)
    }

    pub fn result_shape(self) -> ResultShape {
        match self {
            DetectionModel::Yolo => ResultShape::BoundingBoxes,
            DetectionModel::Vgg16 => ResultShape::Heatmap,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DetectionModel::Yolo => {
                "YOLOv12 is an object detection model that can identify and localize tumors in MRI \
                 images with high precision. It uses a single neural network to predict bounding \
                 boxes and class probabilities directly from full images in one evaluation."
            }
            DetectionModel::Vgg16 => {
                "VGG16 is a convolutional neural network model that excels at image classification \
                 tasks. For tumor detection, it has been fine-tuned to identify patterns associated \
                 with tumorous tissue in MRI scans and generate detailed heatmaps."
            }
        }
    }

    pub fn key_features(self) -> &'static [&'static str] {
        match self {
            DetectionModel::Yolo => &[],
            DetectionModel::Vgg16 => &[
                "Generates detailed Grad-CAM heatmaps",
                "Excellent at tissue classification",
                "High sensitivity for subtle abnormalities",
            ],
        }
    }

    /// (speed, precision) ratings shown next to the description.
    pub fn ratings(self) -> (&'static str, &'static str) {
        match self {
            DetectionModel::Yolo => ("Very Fast", "High"),
            DetectionModel::Vgg16 => ("Moderate", "Very High"),
        }
    }
}

impl fmt::Display for DetectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for DetectionModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yolo" | "yolov12" => Ok(DetectionModel::Yolo),
            "vgg16" | "vgg" => Ok(DetectionModel::Vgg16),
            other => Err(anyhow::anyhow!("unknown model '{other}' (expected yolo or vgg16)")),
        }
    }
}

/// One entry of the service's `GET /models` catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub available: bool,
    #[serde(default)]
    pub description: String,
}
