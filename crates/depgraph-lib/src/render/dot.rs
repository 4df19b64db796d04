//! DOT format output for project graphs.

use crate::catalogue::ProjectGraph;
use std::fmt::Write;

/// Graph name shown by Graphviz viewers
pub const GRAPH_NAME: &str = "Component Dependency Graph";

/// Escape special characters for DOT quoted strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Stable DOT identifier for a project id.
pub fn node_id(project_id: u64) -> String {
    format!("p{project_id}")
}

fn write_attrs(output: &mut String, attrs: &[(&str, &str)]) {
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}=\"{}\"", key, escape_label(value));
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
}

impl DotBuilder {
    /// Create a new strict digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "strict digraph \"{}\" {{", escape_label(name));
        Self { output }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        let _ = writeln!(self.output, "  {}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        self.output.push_str("  node [");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add an edge style default.
    pub fn edge_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        self.output.push_str("  edge [");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with an ID and label.
    pub fn node(&mut self, id: &str, label: &str) -> &mut Self {
        let _ = writeln!(self.output, "  {}[label=\"{}\"];", id, escape_label(label));
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        let _ = writeln!(self.output, "  {from} -> {to};");
        self
    }

    /// Close the graph and return the DOT source.
    pub fn finish(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// Render a project graph as DOT source, left-to-right.
pub fn render_dot(graph: &ProjectGraph) -> String {
    let mut builder = DotBuilder::new(GRAPH_NAME);
    builder
        .attr("rankdir", "LR")
        .node_style(&[
            ("shape", "rectangle"),
            ("fontname", "Arial"),
            ("fontsize", "11"),
            ("style", "filled"),
            ("color", "lightblue"),
        ])
        .edge_style(&[("arrowhead", "normal"), ("arrowsize", "0.5")])
        .blank();

    for node in graph.nodes() {
        builder.node(&node_id(node.id), &node.label);
    }

    if graph.edge_count() > 0 {
        builder.blank();
    }

    for (from, to) in graph.edge_ids() {
        builder.edge(&node_id(from), &node_id(to));
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    include!("dot.test.rs");
}
