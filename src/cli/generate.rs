//! Render the prerequisite diagram.
//!
//! Reads the curriculum, prints its consistency warnings, resolves the
//! prerequisite graph and writes the rendered diagram. Warnings never stop the
//! run; ingestion errors do, before anything is written.
//!
//! # Examples
//!
//! ```bash
//! cursus generate
//! cursus generate --input licence.xml --output docs/licence.mmd
//! cursus generate --format json --stdout > graph.json
//! ```

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::config::CursusConfig;
use crate::core::CursusError;
use crate::ingest::load_curriculum;
use crate::render::{FlowDirection, OutputFormat, RenderOptions, render};
use crate::resolver::resolve;
use crate::validation::validate;

/// Command to generate the prerequisite diagram.
#[derive(Args)]
pub struct GenerateCommand {
    /// Curriculum document to read (default: `input` from cursus.toml, else cursus.xml)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// File to write (default: `output` from cursus.toml, else cursus.mmd)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Flowchart direction: LR, TB, RL or BT
    #[arg(short, long)]
    direction: Option<FlowDirection>,

    /// Print the diagram instead of writing a file
    #[arg(long)]
    stdout: bool,
}

impl GenerateCommand {
    pub async fn execute(self, settings: &CursusConfig, quiet: bool) -> Result<()> {
        let input = self.input.unwrap_or_else(|| settings.input.clone());
        let curriculum = load_curriculum(&input).await?;

        let report = validate(&curriculum);
        if !quiet {
            super::print_warnings(&report, &curriculum);
        }

        let resolution = resolve(&curriculum);
        info!(
            courses = curriculum.len(),
            edges = resolution.graph.edge_count(),
            "prerequisite graph resolved"
        );

        let options = RenderOptions {
            format: self.format,
            direction: self.direction.unwrap_or(settings.direction),
            id_prefix: settings.id_prefix.clone(),
        };
        let rendered = render(&curriculum, &resolution, &options)?;

        if self.stdout {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.flush().await?;
            return Ok(());
        }

        let output = self.output.unwrap_or_else(|| settings.output.clone());
        write_output(&output, &rendered).await?;

        if !quiet {
            println!("{} generated", output.display());
        }
        Ok(())
    }
}

async fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await.map_err(|e| {
            anyhow::Error::new(e).context(CursusError::FileSystemError {
                operation: "create directory".to_string(),
                path: parent.display().to_string(),
            })
        })?;
    }

    fs::write(path, content).await.map_err(|e| {
        anyhow::Error::new(e).context(CursusError::FileSystemError {
            operation: "write".to_string(),
            path: path.display().to_string(),
        })
    })?;

    debug!(path = %path.display(), bytes = content.len(), "diagram written");
    Ok(())
}
