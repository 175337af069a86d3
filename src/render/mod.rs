//! Diagram output.
//!
//! - [`mermaid`] - Mermaid flowchart, one subgraph per semester
//! - [`json`] - the same graph as a JSON document

pub mod json;
pub mod mermaid;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::Curriculum;
use crate::resolver::Resolution;

pub use json::render_json;
pub use mermaid::{FlowDirection, MermaidRenderer};

/// Output format of `cursus generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Mermaid,
    Json,
}

/// Render options shared by every format.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub direction: FlowDirection,
    pub id_prefix: String,
}

/// Render a resolution in the requested format.
pub fn render(curriculum: &Curriculum, resolution: &Resolution, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Mermaid => Ok(MermaidRenderer::new(options.direction, options.id_prefix.clone())
            .render(curriculum, resolution)),
        OutputFormat::Json => render_json(curriculum, resolution, &options.id_prefix),
    }
}
