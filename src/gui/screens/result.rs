use iced::{
    Alignment::Center,
    Element, Length,
    widget::{Column, button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{DetectionKind, DetectionResult},
    gui::{
        AppState, Message,
        widgets::{ScanOverlay, badge, disclaimer, scan_view},
    },
};

pub fn view(state: &AppState) -> Element<'_, Message> {
    let Some(result) = state.session.result() else {
        return Column::new().into();
    };

    let header = row![
        text("Detection Results").size(20),
        badge(result.model.wire_name()),
        text(format!("Analyzed at {}", result.analyzed_at_label())).size(12),
    ]
    .spacing(12)
    .align_y(Center);

    let body: Element<'_, Message> = match &result.kind {
        DetectionKind::BoundingBoxes(boxes) => {
            let overlay = ScanOverlay {
                boxes: boxes.clone(),
                scan_progress: None,
            };
            container(scan_view(state.handles.uploaded.clone(), overlay))
                .center_x(Length::Fill)
                .into()
        }
        DetectionKind::Heatmap { .. } => {
            let original = state
                .handles
                .original
                .clone()
                .or_else(|| state.handles.uploaded.clone());
            row![
                labelled("Original Image", scan_view(original, ScanOverlay::default())),
                labelled(
                    "Grad-CAM Visualization",
                    scan_view(state.handles.overlay.clone(), ScanOverlay::default()),
                ),
            ]
            .spacing(16)
            .into()
        }
    };

    column![
        header,
        summary(result),
        body,
        disclaimer(),
        button("Back to Detection")
            .style(button::secondary)
            .on_press(Message::BackToDetection),
    ]
    .spacing(16)
    .into()
}

fn summary(result: &DetectionResult) -> Element<'_, Message> {
    row![
        stat("Confidence Score", result.confidence_label()),
        stat("Finding", result.finding().to_string()),
    ]
    .spacing(12)
    .into()
}

fn stat<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(column![text(label).size(12), text(value).size(22)].spacing(4))
        .style(bordered_box)
        .padding(12)
        .width(Length::Fill)
        .into()
}

fn labelled<'a>(label: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(13), content].spacing(6).into()
}
