//! Curriculum ingestion.
//!
//! Turns a curriculum document into a [`Curriculum`]. The only supported format is
//! the XML layout handled by [`xml`]:
//!
//! ```xml
//! <cursus>
//!   <course title="Programmation">
//!     <semester>S1</semester>
//!     <new-concept>variable, boucle</new-concept>
//!     <dependency-concept></dependency-concept>
//!   </course>
//! </cursus>
//! ```
//!
//! Every failure here is fatal: a run never reaches validation or resolution
//! with a partially ingested curriculum.

pub mod xml;

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::core::{ConceptId, ConceptRegistry, CursusError, Curriculum};

pub use xml::{parse_curriculum, parse_curriculum_bytes};

/// Split a comma-separated concept field and intern each trimmed name.
///
/// An empty (or blank) field yields no concept. Empty names between commas
/// are skipped as well.
pub fn parse_concept_list(text: &str, registry: &mut ConceptRegistry) -> Vec<ConceptId> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| registry.intern(name))
        .collect()
}

/// Read and parse a curriculum document from disk.
pub async fn load_curriculum(path: &Path) -> Result<Curriculum> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(CursusError::InputNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read(path).await.map_err(|e| {
        anyhow::Error::new(e).context(CursusError::FileSystemError {
            operation: "read".to_string(),
            path: path.display().to_string(),
        })
    })?;

    let curriculum = parse_curriculum_bytes(&content)
        .with_context(|| format!("Failed to load curriculum from {}", path.display()))?;
    debug!(
        path = %path.display(),
        courses = curriculum.len(),
        concepts = curriculum.concepts().len(),
        "curriculum loaded"
    );
    Ok(curriculum)
}
