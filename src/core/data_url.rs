use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Mime type used when the bytes don't look like any image format we know.
pub const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,

    #[error("data URL has no ',' separator")]
    MissingPayload,

    #[error("only base64 data URLs are supported")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// An in-memory file in `data:<mime>;base64,<payload>` form.
#[derive(Clone, PartialEq, Eq)]
pub struct DataUrl {
    raw: String,
    // byte offset of the payload, right after the ','
    payload_start: usize,
}

impl DataUrl {
    /// Encode raw bytes under the given mime type.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let header = format!("data:{mime};base64,");
        let payload_start = header.len();
        let mut raw = header;
        STANDARD.encode_string(bytes, &mut raw);
        Self { raw, payload_start }
    }

    /// Wrap a bare base64 string, as returned by the inference service.
    pub fn from_base64(mime: &str, base64: &str) -> Self {
        let raw = format!("data:{mime};base64,{base64}");
        let payload_start = raw.len() - base64.len();
        Self { raw, payload_start }
    }

    /// Encode bytes, sniffing the mime type from their magic number.
    pub fn sniff(bytes: &[u8]) -> Self {
        Self::from_bytes(sniff_mime(bytes), bytes)
    }

    pub fn parse(raw: impl Into<String>) -> Result<Self, DataUrlError> {
        let raw = raw.into();
        let rest = raw.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let comma = rest.find(',').ok_or(DataUrlError::MissingPayload)?;
        if !rest[..comma].ends_with(";base64") {
            return Err(DataUrlError::NotBase64);
        }
        let payload_start = "data:".len() + comma + 1;
        Ok(Self { raw, payload_start })
    }

    pub fn mime(&self) -> &str {
        let header = &self.raw["data:".len()..self.payload_start - 1];
        header.strip_suffix(";base64").unwrap_or(header)
    }

    pub fn base64(&self) -> &str {
        &self.raw[self.payload_start..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Decode the payload back into the binary file contents.
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        Ok(STANDARD.decode(self.base64())?)
    }

    /// File extension matching the mime type, if it is an image format.
    pub fn extension(&self) -> Option<&'static str> {
        image::ImageFormat::from_mime_type(self.mime())
            .and_then(|format| format.extensions_str().first().copied())
    }
}

impl fmt::Debug for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // payloads are megabytes of base64, keep them out of logs
        f.debug_struct("DataUrl")
            .field("mime", &self.mime())
            .field("base64_len", &self.base64().len())
            .finish()
    }
}

pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    #[test]
    fn test_from_bytes_layout() {
        let url = DataUrl::from_bytes("image/png", b"abc");
        assert_eq!(url.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(url.mime(), "image/png");
        assert_eq!(url.base64(), "YWJj");
    }

    #[test]
    fn test_decode_recovers_bytes() {
        let url = DataUrl::parse("data:image/jpeg;base64,/9j/4A==").unwrap();
        assert_eq!(url.decode().unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(url.mime(), "image/jpeg");
    }

    #[test]
    fn test_from_base64_wraps_service_payload() {
        let url = DataUrl::from_base64("image/png", "iVBORw0KGgo=");
        assert_eq!(url.as_str(), "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(url.base64(), "iVBORw0KGgo=");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            DataUrl::parse("image/png;base64,AAAA"),
            Err(DataUrlError::MissingScheme)
        ));
        assert!(matches!(
            DataUrl::parse("data:image/png;base64"),
            Err(DataUrlError::MissingPayload)
        ));
        assert!(matches!(
            DataUrl::parse("data:text/plain,hello"),
            Err(DataUrlError::NotBase64)
        ));
    }

    #[test]
    fn test_decode_bad_base64() {
        let url = DataUrl::parse("data:image/png;base64,@@@").unwrap();
        assert!(matches!(url.decode(), Err(DataUrlError::InvalidBase64(_))));
    }

    #[test]
    fn test_sniff_png_and_unknown() {
        assert_eq!(DataUrl::sniff(PNG_MAGIC).mime(), "image/png");
        assert_eq!(DataUrl::sniff(b"not an image").mime(), FALLBACK_MIME);
    }

    #[test]
    fn test_extension() {
        assert_eq!(DataUrl::from_bytes("image/png", b"").extension(), Some("png"));
        assert_eq!(DataUrl::from_bytes(FALLBACK_MIME, b"").extension(), None);
    }

    #[test]
    fn test_debug_hides_payload() {
        let url = DataUrl::from_bytes("image/png", &[0u8; 64]);
        let debug = format!("{url:?}");
        assert!(debug.contains("image/png"));
        assert!(!debug.contains("AAAA"));
    }
}
