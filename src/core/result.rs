use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::core::{DataUrl, DetectionModel};

const TUMOR_THRESHOLD: f32 = 0.5;

/// Region reported by the detector, as fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Place the box on an image (or widget) of the given size.
    /// Returns `(x, y, width, height)` in the same units as the size.
    pub fn to_pixels(&self, width: f32, height: f32) -> (f32, f32, f32, f32) {
        (
            self.x * width,
            self.y * height,
            self.width * width,
            self.height * height,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetectionKind {
    BoundingBoxes(Vec<BoundingBox>),
    Heatmap { original: DataUrl, overlay: DataUrl },
}

/// A successful analysis, as shown in the result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub model: DetectionModel,
    pub confidence: f32,
    pub kind: DetectionKind,
    pub analyzed_at: OffsetDateTime,
}

impl DetectionResult {
    pub fn bounding_boxes(model: DetectionModel, confidence: f32, boxes: Vec<BoundingBox>) -> Self {
        Self {
            model,
            confidence,
            kind: DetectionKind::BoundingBoxes(boxes),
            analyzed_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn heatmap(
        model: DetectionModel,
        confidence: f32,
        original: DataUrl,
        overlay: DataUrl,
    ) -> Self {
        Self {
            model,
            confidence,
            kind: DetectionKind::Heatmap { original, overlay },
            analyzed_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn confidence_label(&self) -> String {
        confidence_percent(self.confidence)
    }

    /// The service flags a tumor above 0.5.
    pub fn tumor_detected(&self) -> bool {
        self.confidence > TUMOR_THRESHOLD
    }

    pub fn finding(&self) -> &'static str {
        if self.tumor_detected() {
            "Tumor Detected"
        } else {
            "No Tumor Detected"
        }
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        match &self.kind {
            DetectionKind::BoundingBoxes(boxes) => boxes,
            DetectionKind::Heatmap { .. } => &[],
        }
    }

    pub fn analyzed_at_label(&self) -> String {
        let format = time::macros::format_description!("[hour]:[minute]:[second] UTC");
        self.analyzed_at
            .format(format)
            .unwrap_or_else(|_| self.analyzed_at.to_string())
    }
}

/// Confidence as a percentage with one decimal, e.g. `0.87` -> `"87.0%"`.
pub fn confidence_percent(confidence: f32) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_percent() {
        assert_eq!(confidence_percent(0.87), "87.0%");
        assert_eq!(confidence_percent(1.0), "100.0%");
        assert_eq!(confidence_percent(0.0), "0.0%");
        assert_eq!(confidence_percent(0.1234), "12.3%");
    }

    #[test]
    fn test_finding_follows_threshold() {
        let url = DataUrl::from_bytes("image/png", b"x");
        let high = DetectionResult::heatmap(DetectionModel::Vgg16, 0.87, url.clone(), url.clone());
        let low = DetectionResult::heatmap(DetectionModel::Vgg16, 0.2, url.clone(), url);
        assert_eq!(high.finding(), "Tumor Detected");
        assert_eq!(low.finding(), "No Tumor Detected");
    }

    #[test]
    fn test_box_to_pixels() {
        let bbox = BoundingBox { x: 0.2, y: 0.3, width: 0.1, height: 0.1 };
        let (x, y, w, h) = bbox.to_pixels(400.0, 200.0);
        assert!((x - 80.0).abs() < 1e-3);
        assert!((y - 60.0).abs() < 1e-3);
        assert!((w - 40.0).abs() < 1e-3);
        assert!((h - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_boxes_empty_for_heatmap() {
        let url = DataUrl::from_bytes("image/png", b"x");
        let result = DetectionResult::heatmap(DetectionModel::Vgg16, 0.5, url.clone(), url);
        assert!(result.boxes().is_empty());
    }

    #[test]
    fn test_bounding_box_json() {
        let bbox: BoundingBox =
            serde_json::from_str(r#"{"x":0.2,"y":0.3,"width":0.1,"height":0.1}"#).unwrap();
        assert_eq!(bbox, BoundingBox { x: 0.2, y: 0.3, width: 0.1, height: 0.1 });
    }
}
