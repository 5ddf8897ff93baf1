use iced::{
    Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse,
    widget::{
        canvas::{self, Frame, Geometry, Path, Stroke},
        container, image, stack,
    },
};
use iced_widget::container::bordered_box;

use super::{RED, TEAL};
use crate::core::BoundingBox;

/// Edge length of the square image panel.
pub const PANEL_SIZE: f32 = 420.0;
const SCAN_LINE_WIDTH: f32 = 4.0;

/// Canvas layer drawn on top of the scan: detected regions and, while
/// analyzing, the sweeping scan lines.
#[derive(Debug, Clone, Default)]
pub struct ScanOverlay {
    pub boxes: Vec<BoundingBox>,
    pub scan_progress: Option<u8>,
}

impl ScanOverlay {
    /// Rectangles of the detected regions inside a panel of `size`.
    pub fn box_rects(&self, size: Size) -> Vec<Rectangle> {
        self.boxes
            .iter()
            .map(|bbox| {
                let (x, y, width, height) = bbox.to_pixels(size.width, size.height);
                Rectangle { x, y, width, height }
            })
            .collect()
    }
}

impl<Message> canvas::Program<Message> for ScanOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for rect in self.box_rects(bounds.size()) {
            let path = Path::rectangle(rect.position(), rect.size());
            frame.stroke(&path, Stroke::default().with_color(RED).with_width(3.0));
        }

        if let Some(progress) = self.scan_progress {
            let fraction = f32::from(progress.min(100)) / 100.0;
            let offset = SCAN_LINE_WIDTH / 2.0;
            frame.fill_rectangle(
                Point::new(0.0, fraction * bounds.height - offset),
                Size::new(bounds.width, SCAN_LINE_WIDTH),
                TEAL,
            );
            frame.fill_rectangle(
                Point::new(fraction * bounds.width - offset, 0.0),
                Size::new(SCAN_LINE_WIDTH, bounds.height),
                TEAL,
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Square image panel with the overlay stacked on top.
pub fn scan_view<'a, Message: 'a>(
    handle: Option<image::Handle>,
    overlay: ScanOverlay,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle)
            .content_fit(iced::ContentFit::Fill)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(iced::widget::text("Image unavailable"))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    container(stack![
        picture,
        canvas::Canvas::new(overlay)
            .width(Length::Fill)
            .height(Length::Fill),
    ])
    .style(bordered_box)
    .width(Length::Fixed(PANEL_SIZE))
    .height(Length::Fixed(PANEL_SIZE))
    .into()
}
