// Rust guideline compliant 2026-10-19

//! Graph module for building issue dependency diagrams.
//!
//! This module turns a fetched set of issues into a directed graph of their
//! links and renders it in GraphViz dot notation, with optional same-rank
//! clusters for release cycles.

use crate::format::{format_node, quote, NodeAttributeProvider};
use crate::rank::{render_rank_section, RankBuckets, RankClassifier};
use crate::source::{fetch_issues, IssueSource};
use crate::{Error, Issue, LinkDirection, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fmt::Write;
use std::str::FromStr;
use tracing::debug;

/// Maximum number of issues fetched for one diagram.
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Options controlling diagram generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Link type names drawn as edges.
    pub link_types: Vec<String>,
    /// Rank labels to cluster by, in display order. Empty disables ranks.
    pub rank_order: Vec<String>,
    /// Name of the top-level graph.
    pub title: String,
    /// Upper bound on fetched issues.
    pub max_results: usize,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            link_types: vec!["Blocks".to_string()],
            rank_order: Vec::new(),
            title: "Diagram".to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Rendering formats accepted for diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Raw dot text, no rendering.
    Dot,
    /// Encapsulated PostScript.
    Eps,
    /// XFig.
    Fig,
    /// PDF document.
    Pdf,
    /// SVG image.
    Svg,
    /// PNG image.
    Png,
    /// PostScript.
    Ps,
}

impl GraphFormat {
    /// Returns the GraphViz output format name, also used as file extension.
    pub fn name(self) -> &'static str {
        match self {
            GraphFormat::Dot => "dot",
            GraphFormat::Eps => "eps",
            GraphFormat::Fig => "fig",
            GraphFormat::Pdf => "pdf",
            GraphFormat::Svg => "svg",
            GraphFormat::Png => "png",
            GraphFormat::Ps => "ps",
        }
    }
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(GraphFormat::Dot),
            "eps" => Ok(GraphFormat::Eps),
            "fig" => Ok(GraphFormat::Fig),
            "pdf" => Ok(GraphFormat::Pdf),
            "svg" => Ok(GraphFormat::Svg),
            "png" => Ok(GraphFormat::Png),
            "ps" => Ok(GraphFormat::Ps),
            _ => Err(Error::UnsupportedOutputFormat(s.to_string())),
        }
    }
}

/// A node of the issue graph: the issue key and its dot attributes.
#[derive(Debug, Clone)]
struct IssueNode {
    key: String,
    attrs: Vec<String>,
}

/// Issue graph for dependency diagrams.
///
/// Nodes are the fetched issues, edges the outward links of the selected
/// types whose target was fetched too. Nodes and edges keep fetch order, so
/// rendering the same fetch result twice yields identical text.
pub struct IssueGraph {
    /// Petgraph directed graph; edge weights are link type names.
    graph: DiGraph<IssueNode, String>,
    /// Map of issue keys to their NodeIndex in the graph.
    id_to_node: HashMap<String, NodeIndex>,
    /// Issue keys grouped by rank label.
    ranks: RankBuckets,
}

impl IssueGraph {
    /// Builds the graph for a set of issues.
    ///
    /// # Arguments
    ///
    /// * `issues` - Issues in fetch order
    /// * `source` - Source the issues came from, used for permalinks
    /// * `link_types` - Link type names to draw as edges
    /// * `attrs` - Optional provider of extra node attributes
    /// * `ranks` - Optional rank classifier
    ///
    /// # Returns
    ///
    /// A graph with one node per distinct issue key.
    pub fn from_issues(
        issues: &[Issue],
        source: &dyn IssueSource,
        link_types: &[String],
        attrs: Option<&dyn NodeAttributeProvider>,
        ranks: Option<&dyn RankClassifier>,
    ) -> Self {
        let mut graph = DiGraph::new();
        let mut id_to_node = HashMap::new();
        let mut buckets = RankBuckets::new();
        let mut indexed: Vec<&Issue> = Vec::with_capacity(issues.len());

        for issue in issues {
            if id_to_node.contains_key(&issue.key) {
                debug!("Skipping repeated issue {}", issue.key);
                continue;
            }

            if let Some(rank) = ranks.and_then(|classifier| classifier.rank(issue)) {
                if !rank.is_empty() {
                    debug!("Set rank {} for issue {}", rank, issue.key);
                    buckets.insert(rank, issue.key.clone());
                }
            }

            let node = IssueNode {
                key: issue.key.clone(),
                attrs: format_node(issue, &source.permalink(issue), attrs),
            };
            let node_idx = graph.add_node(node);
            id_to_node.insert(issue.key.clone(), node_idx);
            indexed.push(issue);
        }

        for issue in indexed {
            let from_idx = id_to_node[&issue.key];
            for link in &issue.links {
                if !link_types.contains(&link.link_type) {
                    continue;
                }
                match &link.direction {
                    LinkDirection::Outward { target } => match id_to_node.get(target) {
                        Some(&to_idx) => {
                            graph.add_edge(from_idx, to_idx, link.link_type.clone());
                        }
                        None => {
                            debug!("Skipping external link {} -> {}", issue.key, target);
                        }
                    },
                    LinkDirection::Inward { source: from } => {
                        debug!("Skipping inward link {} -> {}", from, issue.key);
                    }
                }
            }
        }

        Self {
            graph,
            id_to_node,
            ranks: buckets,
        }
    }

    /// Returns the number of issue nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if an issue with `key` is part of the graph.
    pub fn contains(&self, key: &str) -> bool {
        self.id_to_node.contains_key(key)
    }

    /// Returns the edges as `(from, to)` key pairs, in emission order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].key.as_str(),
                    self.graph[edge.target()].key.as_str(),
                )
            })
            .collect()
    }

    /// Returns the rank buckets filled while building the graph.
    pub fn ranks(&self) -> &RankBuckets {
        &self.ranks
    }

    /// Renders the graph in dot notation.
    ///
    /// # Arguments
    ///
    /// * `title` - Name of the top-level graph
    /// * `rank_order` - Rank labels to cluster, in display order
    pub fn to_dot(&self, title: &str, rank_order: &[String]) -> String {
        let mut output = String::with_capacity(256 * (self.node_count() + 1));
        let _ = writeln!(output, "digraph {} {{", quote(title));
        output.push_str("  node [fontname=\"monospace\", shape=\"box\"]\n");

        for node in self.graph.node_weights() {
            let _ = writeln!(output, "  {} [{}]", quote(&node.key), node.attrs.join(", "));
        }

        output.push_str(&render_rank_section(&self.ranks, rank_order));

        for (from, to) in self.edges() {
            let _ = writeln!(output, "  {} -> {}", quote(from), quote(to));
        }

        output.push_str("}\n");
        output
    }
}

/// Generates a dot diagram of the issues matching a query.
///
/// The whole document is built in memory before it is returned, so a source
/// failure never leaves a truncated diagram behind.
///
/// # Arguments
///
/// * `source` - Issue source to query
/// * `query` - Query string, passed through verbatim
/// * `options` - Link types, rank order, title and fetch bound
/// * `attrs` - Optional provider of extra node attributes
/// * `ranks` - Optional rank classifier
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the source cannot be queried.
pub fn generate(
    source: &dyn IssueSource,
    query: &str,
    options: &DotOptions,
    attrs: Option<&dyn NodeAttributeProvider>,
    ranks: Option<&dyn RankClassifier>,
) -> Result<String> {
    let issues = fetch_issues(source, query, options.max_results)?;
    let graph = IssueGraph::from_issues(&issues, source, &options.link_types, attrs, ranks);
    debug!(
        nodes = graph.node_count(),
        edges = graph.graph.edge_count(),
        "Built issue graph"
    );
    Ok(graph.to_dot(&options.title, &options.rank_order))
}
