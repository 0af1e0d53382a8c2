//! # Driftwall Gallery
//!
//! Desktop host for [`driftwall_core`]: an iced application that loads the
//! bundled images, lays them out as a wrapping strip once the window size is
//! known, and renders the strip through a single wgpu shader pass that
//! applies the displacement filter, slot masks and hover zoom.

pub mod app;
pub mod assets;
pub mod infra;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
