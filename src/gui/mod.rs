mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::{NeuroVisionApp, SCAN_INTERVAL, run};
pub use message::Message;
pub use state::{AppState, ImageHandles};
