use iced::{
    Alignment::Center,
    Element, Length,
    widget::{button, column, container, row, text},
};

use crate::gui::{
    AppState, Message,
    widgets::{ScanOverlay, scan_view},
};

/// Image loaded, either waiting for "detect" or with an analysis in flight.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;
    let analyzing = session.is_analyzing();

    let overlay = ScanOverlay {
        boxes: Vec::new(),
        scan_progress: analyzing.then(|| session.scan_progress()),
    };

    let mut content = column![
        container(scan_view(state.handles.uploaded.clone(), overlay)).center_x(Length::Fill)
    ]
    .spacing(16)
    .align_x(Center);

    if analyzing {
        content = content.push(text(format!("{} Analysis", session.model().wire_name())));
    } else {
        content = content.push(
            row![
                button("Upload New Image")
                    .style(button::secondary)
                    .on_press(Message::PickImage),
                button("Remove Image")
                    .style(button::danger)
                    .on_press(Message::RemoveImage),
            ]
            .spacing(10),
        );
    }

    let detect = button(
        container(text(session.detect_label())).center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding(12)
    .on_press_maybe(session.can_detect().then_some(Message::Detect));

    content.push(detect).into()
}
