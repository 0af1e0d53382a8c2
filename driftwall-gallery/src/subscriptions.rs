//! Root-level subscriptions

use iced::{Subscription, window};

use crate::messages::Message;
use crate::state::State;

/// Frame ticks, only while there is a gallery to animate.
pub fn subscription(state: &State) -> Subscription<Message> {
    if state.is_ready() {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
