mod wire;

use std::future::Future;

use reqwest::{
    Client, StatusCode,
    multipart::{Form, Part},
};
use thiserror::Error;
use tracing::{Instrument, debug, info, info_span};

use crate::core::{DetectionRequest, DetectionResult, ModelInfo, Session};

pub use wire::{ModelsResponse, PredictResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response is missing '{0}'")]
    MissingField(&'static str),
}

/// The remote side of an analysis.
pub trait InferenceService {
    fn predict(
        &self,
        request: DetectionRequest,
    ) -> impl Future<Output = Result<DetectionResult, ClientError>> + Send;
}

/// HTTP client for the tumor classification service.
#[derive(Debug, Clone)]
pub struct PredictClient {
    client: Client,
    base_url: String,
}

impl PredictClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        // no explicit timeout, the service can take a while on CPU
        let client = Client::builder().build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        info!("Inference client configured: endpoint={}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Model catalogue advertised by the service.
    pub async fn models(&self) -> Result<Vec<ModelInfo>, ClientError> {
        let response = self.client.get(self.url("/models")).send().await?;
        let response = check_status(response).await?;
        let body: ModelsResponse = response.json().await?;
        Ok(body.models)
    }
}

impl InferenceService for PredictClient {
    async fn predict(&self, request: DetectionRequest) -> Result<DetectionResult, ClientError> {
        let span = info_span!("predict", request_id = %request.id, model = %request.model);
        async move {
            let model = request.model;
            debug!(bytes = request.bytes.len(), mime = %request.mime, "Uploading image");

            let file = Part::bytes(request.bytes)
                .file_name(request.file_name)
                .mime_str(&request.mime)?;
            let form = Form::new()
                .part("file", file)
                .text("model_name", model.wire_name());

            let response = self
                .client
                .post(self.url("/predict"))
                .multipart(form)
                .send()
                .await?;
            let response = check_status(response).await?;
            let body: PredictResponse = response.json().await?;
            debug!(confidence = body.confidence, "Prediction received");
            body.into_result(model)
        }
        .instrument(span)
        .await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

/// Run one analysis for the session: start it, call the service once, settle it.
/// Returns false when the detect control was disabled and nothing was sent.
pub async fn analyze<S: InferenceService>(service: &S, session: &mut Session) -> bool {
    let Some(request) = session.begin_detection() else {
        return false;
    };
    let outcome = service.predict(request).await;
    session.finish(outcome);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PredictClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/predict"), "http://localhost:8000/predict");
    }

    #[tokio::test]
    async fn test_models_unreachable() {
        let client = PredictClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(client.models().await, Err(ClientError::Http(_))));
    }
}
