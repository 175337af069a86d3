//! Mermaid flowchart output.
//!
//! ```text
//! flowchart LR
//! subgraph S1
//!   id0(Programmation)
//! end S1
//! subgraph S2
//!   id1(Algorithmique)
//! end S2
//!
//! id0 --boucle--> id1
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

use crate::constants::DEFAULT_ID_PREFIX;
use crate::core::{CursusError, Curriculum};
use crate::resolver::Resolution;

/// Flowchart orientation.
///
/// Serialized as its Mermaid keyword. Deserialization goes through
/// [`FromStr`](std::str::FromStr), so it is case-insensitive and takes `TD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FlowDirection {
    /// Left to right
    #[default]
    Lr,
    /// Top to bottom
    Tb,
    /// Right to left
    Rl,
    /// Bottom to top
    Bt,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlowDirection::Lr => "LR",
            FlowDirection::Tb => "TB",
            FlowDirection::Rl => "RL",
            FlowDirection::Bt => "BT",
        })
    }
}

impl std::str::FromStr for FlowDirection {
    type Err = CursusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LR" => Ok(FlowDirection::Lr),
            "TB" | "TD" => Ok(FlowDirection::Tb),
            "RL" => Ok(FlowDirection::Rl),
            "BT" => Ok(FlowDirection::Bt),
            _ => Err(CursusError::ConfigError {
                message: format!("unknown flowchart direction '{s}', expected LR, TB, RL or BT"),
            }),
        }
    }
}

impl TryFrom<String> for FlowDirection {
    type Error = CursusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FlowDirection> for String {
    fn from(direction: FlowDirection) -> Self {
        direction.to_string()
    }
}

/// Renders a [`Resolution`] as a Mermaid flowchart.
#[derive(Debug, Clone)]
pub struct MermaidRenderer {
    direction: FlowDirection,
    id_prefix: String,
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self {
            direction: FlowDirection::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl MermaidRenderer {
    pub fn new(direction: FlowDirection, id_prefix: impl Into<String>) -> Self {
        Self {
            direction,
            id_prefix: id_prefix.into(),
        }
    }

    /// Produce the flowchart text.
    ///
    /// Semester blocks list their courses in input order; edges follow the
    /// dependency graph order and point from prerequisite to dependent.
    pub fn render(&self, curriculum: &Curriculum, resolution: &Resolution) -> String {
        let ids = &resolution.identifiers;
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "flowchart {}", self.direction);

        for (semester, courses) in resolution.partition.iter() {
            let _ = writeln!(out, "subgraph {semester}");
            for course in courses {
                let _ = writeln!(
                    out,
                    "  {}({})",
                    ids.key(*course, &self.id_prefix),
                    curriculum.course(*course).title()
                );
            }
            let _ = writeln!(out, "end {semester}");
        }
        out.push('\n');

        for edge in resolution.graph.edges() {
            let _ = writeln!(
                out,
                "{} --{}--> {}",
                ids.key(edge.prerequisite, &self.id_prefix),
                curriculum.concepts().join(edge.concepts, ","),
                ids.key(edge.dependent, &self.id_prefix)
            );
        }
        out
    }
}
