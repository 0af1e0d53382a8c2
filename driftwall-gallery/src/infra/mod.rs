//! Rendering infrastructure for the gallery surface.

pub mod shader_widgets;
