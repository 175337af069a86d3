//! Run the consistency checks without rendering.
//!
//! Reports concepts introduced by more than one course and required concepts
//! that no course introduces. Issues are warnings: the command succeeds unless
//! `--strict` is given.
//!
//! # Examples
//!
//! ```bash
//! cursus validate
//! cursus validate --input licence.xml --strict
//! cursus validate --format json
//! ```
//!
//! # JSON Output
//!
//! ```json
//! {
//!   "valid": false,
//!   "courses": 12,
//!   "issues": [
//!     { "kind": "undefined-dependency", "message": "no concept pile defined for course Compilation[S5]" }
//!   ]
//! }
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::CursusConfig;
use crate::core::CursusError;
use crate::ingest::load_curriculum;
use crate::validation::{ReportEntry, validate};

/// Command to check a curriculum for consistency issues.
#[derive(Args)]
pub struct ValidateCommand {
    /// Curriculum document to check (default: `input` from cursus.toml, else cursus.xml)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Exit with an error when any issue is found
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: ReportFormat,
}

/// Output format of `cursus validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Colored warnings on stderr and a summary line
    #[default]
    Text,
    /// A JSON document on stdout
    Json,
}

#[derive(Serialize)]
struct JsonReport {
    valid: bool,
    courses: usize,
    issues: Vec<ReportEntry>,
}

impl ValidateCommand {
    pub async fn execute(self, settings: &CursusConfig, quiet: bool) -> Result<()> {
        let input = self.input.unwrap_or_else(|| settings.input.clone());
        let curriculum = load_curriculum(&input).await?;
        let report = validate(&curriculum);

        match self.format {
            ReportFormat::Json => {
                let document = JsonReport {
                    valid: report.is_clean(),
                    courses: curriculum.len(),
                    issues: report.to_entries(&curriculum),
                };
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
            ReportFormat::Text if !quiet => {
                super::print_warnings(&report, &curriculum);
                if report.is_clean() {
                    println!(
                        "{} {} is consistent ({} courses)",
                        "✓".green(),
                        input.display(),
                        curriculum.len()
                    );
                } else {
                    println!(
                        "{} {} issue(s) found in {}",
                        "⚠".yellow(),
                        report.len(),
                        input.display()
                    );
                }
            }
            ReportFormat::Text => {}
        }

        if self.strict && !report.is_clean() {
            return Err(CursusError::ValidationFailed {
                count: report.len(),
            }
            .into());
        }
        Ok(())
    }
}
