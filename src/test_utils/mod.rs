//! Test utilities for cursus
//!
//! Helpers shared by unit tests and the integration test suite:
//! - [`fixtures`] - ready-made curriculum documents
//! - [`builder`] - a fluent builder producing curriculum XML
//! - [`init_test_logging`] - opt-in tracing output while testing
//!
//! # Example
//!
//! ```rust,no_run
//! use cursus_cli::test_utils::CurriculumBuilder;
//!
//! let xml = CurriculumBuilder::new()
//!     .course("Programmation", "S1", "variable", "")
//!     .course("Algorithmique", "S2", "tri", "variable")
//!     .build();
//! assert!(xml.contains("<course title=\"Algorithmique\">"));
//! ```

pub mod builder;
pub mod fixtures;

pub use builder::CurriculumBuilder;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, no subscriber is installed.
///
/// ```bash
/// RUST_LOG=cursus_cli=trace cargo test resolver
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
