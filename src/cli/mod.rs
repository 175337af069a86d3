//! Command-line interface for cursus.
//!
//! Each subcommand lives in its own module with its argument structure and an
//! `execute` method. [`Cli`] parses the global flags, initializes logging,
//! loads `cursus.toml` and dispatches.
//!
//! # Available Commands
//!
//! - `generate` - Read the curriculum, print consistency warnings and write the diagram
//! - `validate` - Run the consistency checks only
//! - `tree` - Show the prerequisite tree of one course
//!
//! # Usage
//!
//! ```bash
//! # Render cursus.xml to cursus.mmd
//! cursus generate
//!
//! # Another document, top-to-bottom layout, printed instead of written
//! cursus generate --input licence.xml --direction TB --stdout
//!
//! # Fail when the document has any consistency issue
//! cursus validate --strict
//!
//! # Which courses feed "Compilation"?
//! cursus tree Compilation
//!
//! # Which courses build on "Algorithmique"?
//! cursus tree Algorithmique --invert
//! ```
//!
//! # Output
//!
//! Results go to stdout. Warnings, errors and log lines go to stderr, so
//! `--stdout` output can be piped safely.

mod generate;
mod tree;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::CursusConfig;
use crate::constants::CONFIG_ENV_VAR;
use crate::core::Curriculum;
use crate::validation::ValidationReport;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: Option<String>,

    /// Suppress warnings and informational output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber on stderr.
    ///
    /// `RUST_LOG` takes precedence over the flags. Installing twice is a no-op.
    pub fn init_logging(&self) {
        let level = self.log_level.as_deref().unwrap_or("error");
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Main CLI structure for cursus.
#[derive(Parser)]
#[command(
    name = "cursus",
    about = "Generate prerequisite diagrams from curriculum descriptions",
    version,
    long_about = "cursus reads a curriculum (courses per semester, each introducing and requiring \
                  concepts), links every course to the courses providing its prerequisites and \
                  renders the result as a Mermaid flowchart."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug output.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    ///
    /// Consistency warnings and the final "generated" line are suppressed.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (default: ./cursus.toml).
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the prerequisite diagram
    Generate(generate::GenerateCommand),

    /// Check the curriculum for duplicate introductions and undefined concepts
    Validate(validate::ValidateCommand),

    /// Display the prerequisite tree of a course
    Tree(tree::TreeCommand),
}

impl Cli {
    /// Execute the parsed command with settings derived from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Map the global flags to a [`CliConfig`].
    ///
    /// | Flags | Log level |
    /// |-------|-----------|
    /// | `--verbose` | debug |
    /// | (none) | warn |
    /// | `--quiet` | error |
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit [`CliConfig`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let settings = CursusConfig::load_with_optional(config.config_path.clone()).await?;

        match self.command {
            Commands::Generate(cmd) => cmd.execute(&settings, config.quiet).await,
            Commands::Validate(cmd) => cmd.execute(&settings, config.quiet).await,
            Commands::Tree(cmd) => cmd.execute(&settings).await,
        }
    }
}

/// Print one colored `warning:` line per issue on stderr.
pub(crate) fn print_warnings(report: &ValidationReport, curriculum: &Curriculum) {
    for message in report.messages(curriculum) {
        eprintln!("{}: {}", "warning".yellow().bold(), message);
    }
}
