use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageBuffer, Rgb};
use neurovision::UploadedImage;
use serde_json::{Value, json};

/// Encodes a size x size red PNG in memory.
pub fn create_test_png(size: u32) -> Vec<u8> {
    let img = ImageBuffer::from_fn(size, size, |_, _| Rgb([255u8, 0u8, 0u8]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode test image");
    bytes
}

/// An uploaded 32x32 test scan.
pub fn make_test_upload() -> UploadedImage {
    UploadedImage::new("scan.png", &create_test_png(32))
}

/// Body the VGG16 endpoint sends back, with both images set to `png`.
pub fn heatmap_body(confidence: f64, png: &[u8]) -> Value {
    let encoded = STANDARD.encode(png);
    json!({
        "prediction": if confidence > 0.5 { 1 } else { 0 },
        "confidence": confidence,
        "original_image": encoded,
        "overlay_image": encoded,
    })
}

/// What the fake service saw in one `POST /predict`.
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub model_name: String,
    pub file: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
}

#[derive(Clone)]
struct FakeService {
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running fake inference service.
pub struct FakeServiceHandle {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeServiceHandle {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

/// Starts a fake inference service on an ephemeral port.
/// Every `POST /predict` is recorded and answered with `reply`.
pub async fn spawn_fake_service(reply: Reply) -> FakeServiceHandle {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = FakeService {
        reply,
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/predict", post(predict))
        .route("/models", get(models))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake service");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake service crashed");
    });

    FakeServiceHandle {
        base_url: format!("http://{addr}"),
        requests,
    }
}

async fn predict(State(service): State<FakeService>, mut multipart: Multipart) -> Response {
    let mut recorded = RecordedRequest::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                recorded.file_name = field.file_name().map(str::to_string);
                recorded.content_type = field.content_type().map(str::to_string);
                recorded.file = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            }
            "model_name" => recorded.model_name = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }
    service
        .requests
        .lock()
        .expect("request log poisoned")
        .push(recorded);

    match service.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Status(status) => (status, "inference failed").into_response(),
        Reply::Raw(body) => body.into_response(),
    }
}

async fn models() -> Json<Value> {
    Json(json!({
        "models": [
            {"name": "VGG16", "available": true, "description": "VGG16 with Grad-CAM visualization"},
            {"name": "YOLOv12", "available": false, "description": "Currently unavailable"},
        ]
    }))
}
