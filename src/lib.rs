//! chart-layout: surface-agnostic chart renderer.
//!
//! Registered series are laid out against a canvas (label measurement,
//! drawable-area insets, value normalization, axis-label placement) and then
//! handed to a `Painter` as draw calls. Painting backends, text measurement
//! and animation stay behind traits.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartRenderer, ChartRendererConfig};
pub use error::{ChartError, ChartResult};
