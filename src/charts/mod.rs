//! Charts module - chart configuration and rendering

mod composer;
mod config;
mod renderer;

pub use composer::{ChartComposer, TOP_CLIENTS_LIMIT};
pub use config::{ChartConfig, ChartKind, Dataset, Rgb};
pub use renderer::{ChartRenderer, PngRenderer, RenderError};

#[cfg(test)]
pub(crate) use renderer::RecordingRenderer;
