mod analysis;
mod result;
mod upload;

use iced::Element;

use crate::{
    core::View,
    gui::{
        AppState, Message,
        widgets::{Stage, card, layout, model_panel},
    },
};

const CARD_TITLE: &str = "MRI Image Analysis";
const CARD_DESCRIPTION: &str =
    "Upload an MRI scan image and select a detection model to analyze";

/// Exactly one of the three layouts, picked from the session state.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;
    let view = session.view();

    let main = match view {
        View::NoImage => upload::view(),
        View::ImageLoaded | View::Analyzing => analysis::view(state),
        View::ResultShown => result::view(state),
    };

    layout(
        card(CARD_TITLE, CARD_DESCRIPTION, main),
        model_panel(session.model()),
        Stage::of(view),
    )
}
