//! Annotated tree to DOT (Graphviz) conversion.
//!
//! The generated graph draws the parse tree top-down, one node per tree
//! node, labeled with the variable name or connective symbol. Nodes are
//! filled according to their value: true nodes with `true_fill`, false
//! nodes with `false_fill`, and nodes without a value with `unknown_fill`.
//!
//! # Examples
//!
//! ```
//! use truth_table_rs::annotate::annotate_default;
//! use truth_table_rs::parser::parse;
//!
//! let expr = parse("p ∧ ¬q").unwrap();
//! let tree = annotate_default(&expr);
//!
//! let dot = tree.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::fmt::Write as _;

use crate::annotate::Annotated;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for the standard look: circles with a
/// steel-blue border, green for true and red for false.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape of tree nodes (default: "circle")
    pub node_shape: &'static str,
    /// Fill color of nodes evaluating to true (default: "lightgreen")
    pub true_fill: &'static str,
    /// Fill color of nodes evaluating to false (default: "lightcoral")
    pub false_fill: &'static str,
    /// Fill color of nodes without a value (default: "white")
    pub unknown_fill: &'static str,
    /// Border color of nodes (default: "steelblue")
    pub border_color: &'static str,
    /// Color of parent-child edges (default: "#cccccc")
    pub edge_color: &'static str,
    /// Whether to append the value (`= 1` or `= 0`) to node labels (default: false)
    pub show_values: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            true_fill: "lightgreen",
            false_fill: "lightcoral",
            unknown_fill: "white",
            border_color: "steelblue",
            edge_color: "#cccccc",
            show_values: false,
        }
    }
}

impl Annotated {
    /// Converts the tree to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the tree to DOT format.
    ///
    /// Nodes are numbered in pre-order starting from 0 (the root), and
    /// edges from a node to its children follow operand order.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table_rs::annotate::annotate_default;
    /// use truth_table_rs::dot::DotConfig;
    /// use truth_table_rs::parser::parse;
    ///
    /// let tree = annotate_default(&parse("p ∨ q").unwrap());
    /// let config = DotConfig {
    ///     node_shape: "ellipse",
    ///     show_values: true,
    ///     ..DotConfig::default()
    /// };
    ///
    /// let dot = tree.to_dot_with_config(&config).unwrap();
    /// assert!(dot.contains("label=\"∨ = 1\""));
    /// ```
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(
            dot,
            "node [shape={}, style=filled, color=\"{}\", penwidth=3];",
            config.node_shape, config.border_color
        )?;
        writeln!(dot, "edge [color=\"{}\", penwidth=2, arrowhead=none];", config.edge_color)?;

        let mut next_id = 0;
        write_node(&mut dot, self, &mut next_id, config)?;

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

/// Writes `node` and its subtree, returning the id given to `node`.
fn write_node(
    dot: &mut String,
    node: &Annotated,
    next_id: &mut usize,
    config: &DotConfig,
) -> Result<usize, std::fmt::Error> {
    let id = *next_id;
    *next_id += 1;

    let fill = match node.value() {
        Some(true) => config.true_fill,
        Some(false) => config.false_fill,
        None => config.unknown_fill,
    };
    let label = match node.value() {
        Some(value) if config.show_values => format!("{} = {}", node.label(), value as u8),
        _ => node.label().to_string(),
    };
    writeln!(dot, "{} [label=\"{}\", fillcolor=\"{}\"];", id, label, fill)?;

    for child in node.children() {
        let child_id = write_node(dot, child, next_id, config)?;
        writeln!(dot, "{} -> {};", id, child_id)?;
    }
    Ok(id)
}
