//! Custom `iced::widget::shader` programs.

pub mod gallery;
