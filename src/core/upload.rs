use std::path::Path;

use uuid::Uuid;

use crate::core::{DataUrl, DataUrlError, DetectionModel};

/// The file the user picked, held as a data URL for as long as it is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub data_url: DataUrl,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.into(),
            data_url: DataUrl::sniff(bytes),
        }
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, &bytes))
    }

    /// Binary payload ready for the multipart upload.
    pub fn payload(&self) -> Result<Vec<u8>, DataUrlError> {
        self.data_url.decode()
    }
}

/// Everything one `POST /predict` needs. Lives only for the duration of the call.
#[derive(Debug, Clone)]
pub struct DetectionRequest {
    pub id: Uuid,
    pub model: DetectionModel,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DetectionRequest {
    pub fn new(model: DetectionModel, image: &UploadedImage) -> Result<Self, DataUrlError> {
        Ok(Self {
            id: Uuid::new_v4(),
            model,
            file_name: image.file_name.clone(),
            mime: image.data_url.mime().to_string(),
            bytes: image.payload()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_decoded_bytes() {
        let image = UploadedImage::new("scan.bin", b"\x01\x02\x03");
        let request = DetectionRequest::new(DetectionModel::Vgg16, &image).unwrap();
        assert_eq!(request.bytes, vec![1, 2, 3]);
        assert_eq!(request.model.wire_name(), "VGG16");
        assert_eq!(request.file_name, "scan.bin");
        assert_eq!(request.mime, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_load_from_disk() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("brain.png");
        tokio::fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).await?;

        let image = UploadedImage::load(&path).await?;
        assert_eq!(image.file_name, "brain.png");
        assert_eq!(image.data_url.mime(), "image/png");
        assert_eq!(image.payload()?.len(), 8);
        Ok(())
    }
}
