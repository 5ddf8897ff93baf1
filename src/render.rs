use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};
use tracing::info;

use crate::core::{BoundingBox, DetectionKind, DetectionResult, UploadedImage};

/// Red used for detected regions.
pub const BOX_COLOR: Rgba<u8> = Rgba([239, 68, 68, 255]);
const BOX_THICKNESS: u32 = 3;

/// Draw the detected regions onto a copy of the image.
pub fn annotate(image: &DynamicImage, boxes: &[BoundingBox]) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    let (width, height) = canvas.dimensions();

    for bbox in boxes {
        let (x, y, w, h) = bbox.to_pixels(width as f32, height as f32);
        for inset in 0..BOX_THICKNESS {
            let w = (w.round() as i64 - 2 * inset as i64).max(1) as u32;
            let h = (h.round() as i64 - 2 * inset as i64).max(1) as u32;
            let rect = Rect::at(x.round() as i32 + inset as i32, y.round() as i32 + inset as i32)
                .of_size(w, h);
            draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);
        }
    }

    canvas
}

/// Write the images of a result into `out_dir`, returning the files written.
///
/// Heatmap results are written as the service sent them (`original.png`,
/// `heatmap.png`, extension taken from each image's mime type); box results
/// are drawn over the uploaded image (`annotated.png`).
pub fn export(result: &DetectionResult, source: &UploadedImage, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let written = match &result.kind {
        DetectionKind::Heatmap { original, overlay } => {
            let original_path =
                out_dir.join(format!("original.{}", original.extension().unwrap_or("png")));
            let heatmap_path =
                out_dir.join(format!("heatmap.{}", overlay.extension().unwrap_or("png")));
            std::fs::write(&original_path, original.decode()?)?;
            std::fs::write(&heatmap_path, overlay.decode()?)?;
            vec![original_path, heatmap_path]
        }
        DetectionKind::BoundingBoxes(boxes) => {
            let image = image::load_from_memory(&source.payload()?)
                .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
            let annotated_path = out_dir.join("annotated.png");
            annotate(&image, boxes).save_with_format(&annotated_path, image::ImageFormat::Png)?;
            vec![annotated_path]
        }
    };

    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(written)
}
