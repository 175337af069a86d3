//! Integration test suite for cursus
//!
//! End-to-end tests running the `cursus` binary against curriculum documents
//! written to a temporary project directory.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **config**: `cursus.toml` lookup, overrides and errors
//! - **errors**: fatal ingestion errors and exit codes
//! - **generate**: diagram generation and its output formats
//! - **resolution**: prerequisite resolution rules observed in the output
//! - **tree**: the `tree` command
//! - **validate**: the `validate` command

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod config;
mod errors;
mod generate;
mod resolution;
mod tree;
mod validate;
