use driftwall_core::Size;
use iced::Task;

use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update: {}", message.name());

    match message {
        Message::AssetsLoaded(Ok(assets)) => {
            log::debug!("Loaded {} gallery images", assets.images.len());
            state.assets = Some(assets);
            state.try_build_gallery();
        }
        Message::AssetsLoaded(Err(error)) => {
            log::error!("Failed to load gallery assets: {error}");
            state.load_error = Some(error);
        }
        Message::ViewportMeasured(size) => on_viewport_measured(state, size),
        Message::Frame(now) => {
            let dt = state.frame_delta(now);
            if let Some(gallery) = state.gallery.as_mut() {
                gallery.advance(dt);
            }
        }
        Message::Wheel(delta) => {
            if let Some(gallery) = state.gallery.as_mut() {
                gallery.on_wheel(delta);
            }
        }
        Message::HoverChanged(slot) => {
            if let Some(gallery) = state.gallery.as_mut() {
                log::trace!("hover {:?} -> {slot:?}", gallery.hovered());
                gallery.set_hovered(slot);
            }
        }
    }

    Task::none()
}

fn on_viewport_measured(state: &mut State, size: Size) {
    if state.viewport.is_some() {
        log::trace!(
            "Ignoring viewport remeasure {}x{}",
            size.width,
            size.height
        );
        return;
    }
    if size.is_degenerate() {
        log::warn!(
            "Ignoring degenerate viewport {}x{}",
            size.width,
            size.height
        );
        return;
    }

    log::debug!("Viewport measured at {}x{}", size.width, size.height);
    state.viewport = Some(size);
    state.try_build_gallery();
}
