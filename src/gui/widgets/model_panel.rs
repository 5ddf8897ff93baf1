use iced::{
    Element, Length,
    widget::{Column, Row, button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use super::{badge, card};
use crate::{core::DetectionModel, gui::Message};

/// Sidebar with one tab per model and the selected model's details.
pub fn model_panel<'a>(selected: DetectionModel) -> Element<'a, Message> {
    let tabs: Row<'a, Message> = row(DetectionModel::ALL.iter().map(|&model| {
        let style = if model == selected {
            button::primary
        } else {
            button::secondary
        };
        Element::from(
            button(text(model.wire_name()))
                .style(style)
                .width(Length::Fill)
                .on_press(Message::SelectModel(model)),
        )
    }))
    .spacing(6);

    let mut heading: Row<'a, Message> = row![text(selected.title()).size(18)].spacing(10);
    if !selected.is_available() {
        heading = heading.push(badge("Available Soon"));
    }

    let (speed, precision) = selected.ratings();
    let ratings = row![
        rating("Speed", speed),
        rating("Precision", precision),
    ]
    .spacing(10);

    let mut details: Column<'a, Message> =
        column![heading, text(selected.description()).size(14), ratings].spacing(14);

    let features = selected.key_features();
    if !features.is_empty() {
        let list: Column<'a, Message> = Column::with_children(
            features
                .iter()
                .map(|f| Element::from(text(format!("• {f}")).size(13))),
        );
        details = details.push(column![text("Key Features").size(14), list].spacing(6));
    }

    if !selected.is_available() {
        details = details.push(
            container(
                text(format!(
                    "Coming Soon: The {} model is currently under development and will be \
                     available in a future update.",
                    selected.wire_name()
                ))
                .size(13),
            )
            .style(bordered_box)
            .padding(10),
        );
    }

    card(
        "Detection Models",
        "Choose the AI model for tumor detection",
        column![tabs, details].spacing(16),
    )
}

fn rating<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    container(column![text(label).size(12), text(value).size(14)].spacing(4))
        .style(bordered_box)
        .padding(8)
        .width(Length::Fill)
        .into()
}
