mod model_panel;
mod overlay;

use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::core::View;

pub use model_panel::model_panel;
pub use overlay::{ScanOverlay, scan_view};

pub const TEAL: Color = Color { r: 0.078, g: 0.722, b: 0.651, a: 1.0 };
pub const RED: Color = Color { r: 0.937, g: 0.267, b: 0.267, a: 1.0 };

const DISCLAIMER: &str = "Note: This is an automated detection result. Please consult with a \
                          medical professional for diagnosis.";

/// Progress through one analysis, shown as a row of chips above the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Upload,
    Analyze,
    Results,
}

impl Stage {
    pub fn of(view: View) -> Self {
        match view {
            View::NoImage => Stage::Upload,
            View::ImageLoaded | View::Analyzing => Stage::Analyze,
            View::ResultShown => Stage::Results,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Stage::Upload => "1. Upload",
            Stage::Analyze => "2. Analyze",
            Stage::Results => "3. Results",
        }
    }

    fn style(self, other: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(2));
            // stages already passed get dimmed, the current one highlighted
            if self > other {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else if self == other {
                style.background(TEAL)
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

/// Page skeleton: header, stage chips, main card and model sidebar.
pub fn layout<'a, Message>(
    main_content: impl Into<Element<'a, Message>>,
    sidebar: impl Into<Element<'a, Message>>,
    stage: Stage,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let header = column![
        text("Brain Tumor Detection System").size(32),
        text(
            "An advanced medical imaging tool that uses deep learning models to detect and \
             analyze potential brain tumors from MRI scans."
        ),
        row![
            container(text(Stage::Upload.label())).style(stage.style(Stage::Upload)).padding(8),
            container(text(Stage::Analyze.label())).style(stage.style(Stage::Analyze)).padding(8),
            container(text(Stage::Results.label())).style(stage.style(Stage::Results)).padding(8),
        ]
        .spacing(10),
    ]
    .spacing(10)
    .align_x(Center);

    container(
        column![
            header,
            row![
                container(main_content.into()).width(Length::FillPortion(2)),
                container(sidebar.into()).width(Length::FillPortion(1)),
            ]
            .spacing(24),
        ]
        .spacing(24)
        .padding(24),
    )
    .center_x(Length::Fill)
    .into()
}

/// Bordered card with a title and a one-line description.
pub fn card<'a, Message>(
    title: &'a str,
    description: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            text(title).size(24),
            text(description).size(14),
            content.into(),
        ]
        .spacing(16),
    )
    .style(bordered_box)
    .padding(20)
    .width(Length::Fill)
    .into()
}

pub fn badge<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(12))
        .style(bordered_box)
        .padding([2, 8])
        .into()
}

pub fn disclaimer<'a, Message: 'a>() -> Element<'a, Message> {
    container(text(DISCLAIMER).size(13))
        .style(bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}
