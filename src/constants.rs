//! Constants shared across the crate.
//!
//! File names and environment variables in one place so the CLI, the
//! configuration loader and the tests agree on them.

/// Curriculum document read when neither `--input` nor the config names one.
pub const DEFAULT_INPUT_FILE: &str = "cursus.xml";

/// Diagram written when neither `--output` nor the config names one.
pub const DEFAULT_OUTPUT_FILE: &str = "cursus.mmd";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cursus.toml";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CURSUS_CONFIG";

/// Prefix of the rendered course identifiers (`id0`, `id1`, ...).
pub const DEFAULT_ID_PREFIX: &str = "id";
