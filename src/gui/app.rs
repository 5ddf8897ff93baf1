use std::{path::PathBuf, sync::Arc, time::Duration};

use iced::{Element, Event, Subscription, Task, event, window};
use rfd::AsyncFileDialog;
use tracing::{debug, error};

use super::{AppState, Message, screens};
use crate::{
    client::{InferenceService, PredictClient},
    config::Settings,
    core::UploadedImage,
};

/// Period of the scanning animation while an analysis is in flight.
pub const SCAN_INTERVAL: Duration = Duration::from_millis(50);

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"];

pub struct NeuroVisionApp {
    state: AppState,
    client: Arc<PredictClient>,
}

impl NeuroVisionApp {
    pub fn new(client: Arc<PredictClient>) -> Self {
        Self {
            state: AppState::default(),
            client,
        }
    }

    pub fn title(&self) -> String {
        match self.state.session.image() {
            Some(image) => format!("NeuroVision - {}", image.file_name),
            None => "NeuroVision - Brain Tumor Detection".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Upload MRI Scan")
                    .add_filter("MRI image", IMAGE_EXTENSIONS)
                    .pick_file(),
                |handle| Message::FilePicked(handle.map(|data| data.path().to_path_buf())),
            ),
            Message::FilePicked(None) => Task::none(),
            Message::FilePicked(Some(path)) | Message::FileDropped(path) => load_image(path),
            Message::ImageLoaded(Ok(image)) => {
                self.state.load_image(image);
                Task::none()
            }
            Message::ImageLoaded(Err(e)) => {
                error!("Error reading image: {e}");
                Task::none()
            }
            Message::RemoveImage => {
                self.state.remove_image();
                Task::none()
            }
            Message::SelectModel(model) => {
                self.state.session.select_model(model);
                Task::none()
            }
            Message::Detect => match self.state.session.begin_detection() {
                Some(request) => {
                    let client = self.client.clone();
                    Task::perform(
                        async move { client.predict(request).await.map_err(Arc::new) },
                        Message::DetectionFinished,
                    )
                }
                None => Task::none(),
            },
            Message::DetectionFinished(outcome) => {
                self.state.finish(outcome);
                Task::none()
            }
            Message::BackToDetection => {
                self.state.back_to_detection();
                Task::none()
            }
            Message::ScanTick => {
                self.state.session.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        screens::view(&self.state)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let dropped = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        });

        // only exists while analyzing; `Session::finish` leaves that state on
        // success and failure alike, which drops the timer
        let scan = if self.state.session.is_analyzing() {
            iced::time::every(SCAN_INTERVAL).map(|_| Message::ScanTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([dropped, scan])
    }
}

fn load_image(path: PathBuf) -> Task<Message> {
    debug!("Reading {}", path.display());
    Task::perform(
        async move { UploadedImage::load(&path).await.map_err(|e| e.to_string()) },
        Message::ImageLoaded,
    )
}

/// Open the main window and block until it is closed.
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let client = Arc::new(PredictClient::new(&settings.api_url)?);

    iced::application(
        move || NeuroVisionApp::new(client.clone()),
        NeuroVisionApp::update,
        NeuroVisionApp::view,
    )
    .title(NeuroVisionApp::title)
    .subscription(NeuroVisionApp::subscription)
    .window_size((1120.0, 780.0))
    .run()?;

    Ok(())
}
