//! Root-level view composition

use iced::widget::{container, shader};
use iced::{Color, Element, Length};

use crate::infra::shader_widgets::gallery::GalleryProgram;
use crate::messages::Message;
use crate::state::State;

/// Stage colour behind the strip, `#1099bb`.
pub const BACKGROUND: Color = Color::from_rgb8(0x10, 0x99, 0xbb);

pub fn view(state: &State) -> Element<'_, Message> {
    let program = match (state.gallery.as_ref(), state.assets.as_ref()) {
        (Some(gallery), Some(assets)) => {
            GalleryProgram::new(Some((gallery, &assets.textures)))
        }
        _ => GalleryProgram::new(None),
    };

    let surface = shader(program).width(Length::Fill).height(Length::Fill);

    container(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style::default().background(BACKGROUND))
        .into()
}
