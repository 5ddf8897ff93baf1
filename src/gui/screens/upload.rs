use iced::{
    Alignment::Center,
    Element, Length,
    widget::{button, column, container, text},
};

use crate::gui::Message;

/// Drop zone shown before any image is loaded.
pub fn view<'a>() -> Element<'a, Message> {
    let content = column![
        text("Click to upload or drag and drop").size(18),
        text("MRI image files only (PNG, JPG)").size(13),
    ]
    .spacing(8)
    .align_x(Center);

    button(
        container(content)
            .center_x(Length::Fill)
            .padding(60),
    )
    .style(button::secondary)
    .width(Length::Fill)
    .on_press(Message::PickImage)
    .into()
}
