//! Report renderers for different output formats
//!
//! Reports carry no presentation concerns; each renderer decides how the
//! description, symptoms and solutions are laid out.

use crate::report::Report;
use clap::ValueEnum;
use serde::Deserialize;

/// Simple trait for rendering a report in a specific format
pub trait Renderer {
    /// Render the report to a string
    fn render(&self, report: &Report) -> String;
}

pub mod detailed;
pub mod json;
pub mod plain;

pub use detailed::DetailedRenderer;
pub use json::{JsonRenderer, JsonReport};
pub use plain::PlainRenderer;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Description and suggestions only
    Plain,

    /// Description, aligned symptoms and grouped solutions
    Detailed,

    /// Machine-readable JSON document
    Json,
}

impl OutputFormat {
    /// Renderer for this format; `color` only affects the detailed renderer
    pub fn renderer(self, color: bool) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Plain => Box::new(PlainRenderer),
            OutputFormat::Detailed => Box::new(DetailedRenderer::new().with_color(color)),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}
