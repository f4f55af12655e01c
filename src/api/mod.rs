mod label_format;
pub mod layout;
mod renderer;
mod renderer_config;

pub use label_format::format_axis_value;
pub use layout::{ChartLayout, LabelExtents};
pub use renderer::{ChartRenderer, RenderState};
pub use renderer_config::ChartRendererConfig;
