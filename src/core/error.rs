//! Error handling for cursus
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`CursusError`]) for every failure that aborts a run
//! 2. **User-friendly messages** ([`ErrorContext`]) with details and an actionable
//!    suggestion when the CLI reports the failure
//!
//! Validation findings (duplicate introductions, dangling dependencies) are *not*
//! errors: they are collected in a [`crate::validation::ValidationReport`] and the
//! run continues. Everything in this module aborts the run before any diagram is
//! produced.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cursus_cli::core::{CursusError, user_friendly_error};
//!
//! let error = CursusError::InvalidSemester {
//!     token: "S12".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error, details and suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for cursus operations.
///
/// # Error Categories
///
/// ## Ingestion
/// - [`XmlError`](CursusError::XmlError) - The document is not well-formed XML
/// - [`UnknownElement`](CursusError::UnknownElement) - Unexpected element in the document
/// - [`InvalidSemester`](CursusError::InvalidSemester) - Semester token outside `S1`..`S9`
/// - [`MissingField`](CursusError::MissingField) - A course lacks a required field
///
/// ## Files and configuration
/// - [`InputNotFound`](CursusError::InputNotFound) - The curriculum document does not exist
/// - [`FileSystemError`](CursusError::FileSystemError) - Reading or writing a file failed
/// - [`ConfigError`](CursusError::ConfigError) - The configuration file is invalid
///
/// ## Queries
/// - [`CourseNotFound`](CursusError::CourseNotFound) - No course matches a title lookup
/// - [`AmbiguousCourse`](CursusError::AmbiguousCourse) - Several courses share a title
/// - [`ValidationFailed`](CursusError::ValidationFailed) - Strict validation found issues
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursusError {
    /// The curriculum document is not well-formed XML.
    #[error("Malformed curriculum document at byte {position}: {reason}")]
    XmlError {
        /// Byte offset in the document where the parser stopped
        position: u64,
        /// Parser message
        reason: String,
    },

    /// An element other than the known curriculum elements was found.
    #[error("Unknown element <{element}> in curriculum document")]
    UnknownElement {
        /// Local name of the unexpected element
        element: String,
    },

    /// A semester token does not name one of the fixed semesters.
    #[error("Invalid semester '{token}'")]
    InvalidSemester {
        /// The token as written in the document
        token: String,
    },

    /// A course element does not supply one of its required fields.
    #[error("Missing {field} for course {course}")]
    MissingField {
        /// Title of the course, or a placeholder when the title itself is missing
        course: String,
        /// Name of the missing field
        field: String,
    },

    /// The curriculum document could not be found.
    #[error("Curriculum document not found: {path}")]
    InputNotFound {
        /// The path that was looked up
        path: String,
    },

    /// A file operation failed.
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The operation that failed (e.g., "read", "write")
        operation: String,
        /// The path involved
        path: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// No course with the requested title exists.
    #[error("Course '{title}' not found")]
    CourseNotFound {
        /// The requested title
        title: String,
        /// Closest existing titles
        similar: Vec<String>,
    },

    /// Several courses share the requested title.
    #[error("Course title '{title}' is ambiguous: found in {semesters}")]
    AmbiguousCourse {
        /// The requested title
        title: String,
        /// Comma-joined semesters holding a course with that title
        semesters: String,
    },

    /// `validate --strict` found consistency issues.
    #[error("Validation found {count} issue(s)")]
    ValidationFailed {
        /// Number of issues reported
        count: usize,
    },

    /// Generic error with a message
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// An error together with user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CursusError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: CursusError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Recognizes [`CursusError`] anywhere in the error chain, then common
/// [`std::io::Error`] kinds and TOML errors. Anything else is reported with its
/// full cause chain. When a [`CursusError`] wraps a lower-level cause, such as
/// the [`std::io::Error`] of a failed read, that cause becomes the details.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let cursus_error = error
        .downcast_ref::<CursusError>()
        .or_else(|| error.chain().find_map(|cause| cause.downcast_ref::<CursusError>()));
    if let Some(cursus_error) = cursus_error {
        let ctx = create_error_context(cursus_error.clone());
        let root = error.root_cause();
        if root.downcast_ref::<CursusError>().is_none() {
            return ctx.with_details(root.to_string());
        }
        return ctx;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(CursusError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check the permissions of the input and output files");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(CursusError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(CursusError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of the configuration file");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(CursusError::Other {
        message,
    })
}

fn create_error_context(error: CursusError) -> ErrorContext {
    match &error {
        CursusError::XmlError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that every element is closed and attribute values are quoted")
            .with_details("The curriculum document must be well-formed XML"),

        CursusError::UnknownElement { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Use only <cursus>, <course title=\"..\">, <semester>, <new-concept> and <dependency-concept>",
            ),

        CursusError::InvalidSemester { .. } => ErrorContext::new(error)
            .with_suggestion("Semesters are written S1 to S9")
            .with_details("The set of semesters is fixed"),

        CursusError::MissingField { field, .. } => {
            let suggestion = if field == "title" {
                "Add a title attribute: <course title=\"...\">".to_string()
            } else {
                format!("Add a <{field}> element to the course, it may be empty")
            };
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }

        CursusError::InputNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Pass the document with --input or set `input` in cursus.toml"),

        CursusError::FileSystemError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the path exists and is accessible"),

        CursusError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Check cursus.toml: known keys are input, output, direction and id_prefix"),

        CursusError::CourseNotFound { similar, .. } => {
            let ctx = ErrorContext::new(error.clone());
            if similar.is_empty() {
                ctx.with_suggestion("Course titles are matched exactly, check the spelling")
            } else {
                ctx.with_suggestion(format!("Did you mean: {}?", similar.join(", ")))
            }
        }

        CursusError::AmbiguousCourse { .. } => ErrorContext::new(error)
            .with_suggestion("Pick one with --semester"),

        CursusError::ValidationFailed { .. } => ErrorContext::new(error)
            .with_suggestion("Fix the warnings above, or drop --strict to accept them"),

        CursusError::Other { .. } => ErrorContext::new(error),
    }
}
