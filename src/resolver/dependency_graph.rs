//! The resolved course dependency graph.
//!
//! For every course the graph keeps an insertion-ordered map from prerequisite
//! course to the set of concepts justifying that edge. Several concepts served by
//! the same prerequisite share one edge. A `petgraph` mirror of the same edges
//! backs the reachability queries used by the `tree` command.

use indexmap::{IndexMap, IndexSet};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Reversed};

use crate::core::{ConceptId, CourseId, Curriculum};

/// Concepts labelling one edge, in the order they were resolved.
pub type ConceptSet = IndexSet<ConceptId>;

/// One prerequisite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// The course that needs the concepts.
    pub dependent: CourseId,
    /// The course that teaches them.
    pub prerequisite: CourseId,
    pub concepts: &'a ConceptSet,
}

/// Course dependency graph.
///
/// Built once by [`crate::resolver::DependencyResolver`], read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// dependent -> prerequisite -> concepts, in resolution order.
    dependencies: IndexMap<CourseId, IndexMap<CourseId, ConceptSet>>,
    /// Same edges, dependent -> prerequisite. Node `i` is course `i`.
    graph: DiGraph<CourseId, ()>,
}

impl DependencyGraph {
    /// Create a graph with one node per course of `curriculum` and no edge.
    pub fn new(curriculum: &Curriculum) -> Self {
        let mut graph = DiGraph::with_capacity(curriculum.len(), 0);
        for (id, _) in curriculum.iter() {
            graph.add_node(id);
        }
        Self {
            dependencies: IndexMap::new(),
            graph,
        }
    }

    fn node(id: CourseId) -> NodeIndex {
        NodeIndex::new(id.index())
    }

    /// Register `course` so it appears in iteration order even without edges.
    pub(crate) fn insert_course(&mut self, course: CourseId) {
        self.dependencies.entry(course).or_default();
    }

    /// Add `concept` to the label of the edge `prerequisite -> dependent`,
    /// creating the edge if needed.
    pub fn add_edge(&mut self, dependent: CourseId, prerequisite: CourseId, concept: ConceptId) {
        let edges = self.dependencies.entry(dependent).or_default();
        let concepts = edges.entry(prerequisite).or_insert_with(|| {
            self.graph.add_edge(Self::node(dependent), Self::node(prerequisite), ());
            ConceptSet::new()
        });
        concepts.insert(concept);
    }

    /// Prerequisites of `course` with their concepts, in resolution order.
    pub fn prerequisites(&self, course: CourseId) -> Option<&IndexMap<CourseId, ConceptSet>> {
        self.dependencies.get(&course)
    }

    /// Concepts labelling the edge `prerequisite -> dependent`, if any.
    pub fn concepts(&self, dependent: CourseId, prerequisite: CourseId) -> Option<&ConceptSet> {
        self.dependencies.get(&dependent).and_then(|edges| edges.get(&prerequisite))
    }

    /// Courses in resolution order (semester by semester).
    pub fn courses(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.dependencies.keys().copied()
    }

    /// Every edge, grouped by dependent in resolution order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.dependencies.iter().flat_map(|(dependent, edges)| {
            edges.iter().map(move |(prerequisite, concepts)| Edge {
                dependent: *dependent,
                prerequisite: *prerequisite,
                concepts,
            })
        })
    }

    /// Courses directly depending on `course`, in edge order.
    pub fn dependents(&self, course: CourseId) -> Vec<CourseId> {
        self.edges().filter(|edge| edge.prerequisite == course).map(|edge| edge.dependent).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Every course reachable through prerequisite edges, sorted by course.
    ///
    /// A self-loop puts the course in its own result.
    pub fn transitive_prerequisites(&self, course: CourseId) -> Vec<CourseId> {
        if course.index() >= self.graph.node_count() {
            return Vec::new();
        }
        let start = Self::node(course);
        let mut bfs = Bfs::new(&self.graph, start);
        let mut reached = Vec::new();
        while let Some(node) = bfs.next(&self.graph) {
            if node != start || self.has_self_loop(node) {
                reached.push(self.graph[node]);
            }
        }
        reached.sort();
        reached
    }

    /// Every course depending on `course`, directly or not, sorted by course.
    pub fn transitive_dependents(&self, course: CourseId) -> Vec<CourseId> {
        if course.index() >= self.graph.node_count() {
            return Vec::new();
        }
        let start = Self::node(course);
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, start);
        let mut reached = Vec::new();
        while let Some(node) = bfs.next(reversed) {
            if node != start || self.has_self_loop(node) {
                reached.push(self.graph[node]);
            }
        }
        reached.sort();
        reached
    }

    fn has_self_loop(&self, node: NodeIndex) -> bool {
        self.graph.neighbors_directed(node, Direction::Outgoing).any(|n| n == node)
    }

    /// Render the prerequisite (or, with `invert`, dependent) tree of `root`.
    ///
    /// Each line shows the course label and the concepts of the edge leading to
    /// it. A course already expanded earlier is marked `(*)` and not expanded
    /// again, which also stops on cycles. `depth` limits the number of levels
    /// below the root.
    pub fn to_tree_string(
        &self,
        curriculum: &Curriculum,
        root: CourseId,
        invert: bool,
        depth: Option<usize>,
    ) -> String {
        let mut result = format!("{}\n", curriculum.label(root));
        let mut expanded = IndexSet::new();
        expanded.insert(root);
        self.build_tree_string(curriculum, root, invert, depth, "", 1, &mut expanded, &mut result);
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn build_tree_string(
        &self,
        curriculum: &Curriculum,
        node: CourseId,
        invert: bool,
        depth: Option<usize>,
        prefix: &str,
        level: usize,
        expanded: &mut IndexSet<CourseId>,
        result: &mut String,
    ) {
        if depth.is_some_and(|max| level > max) {
            return;
        }

        let children: Vec<(CourseId, &ConceptSet)> = if invert {
            self.dependents(node)
                .into_iter()
                .filter_map(|dependent| {
                    self.concepts(dependent, node).map(|concepts| (dependent, concepts))
                })
                .collect()
        } else {
            self.prerequisites(node)
                .map(|edges| edges.iter().map(|(id, concepts)| (*id, concepts)).collect())
                .unwrap_or_default()
        };

        for (i, (child, concepts)) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            let repeated = !expanded.insert(*child);
            result.push_str(&format!(
                "{prefix}{connector}{} ({}){}\n",
                curriculum.label(*child),
                curriculum.concepts().join(*concepts, ", "),
                if repeated { " (*)" } else { "" }
            ));

            if !repeated {
                let child_prefix = if is_last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                self.build_tree_string(
                    curriculum,
                    *child,
                    invert,
                    depth,
                    &child_prefix,
                    level + 1,
                    expanded,
                    result,
                );
            }
        }
    }
}
