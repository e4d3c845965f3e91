use crate::application::dto::{QueryResponse, QueryResult};
use crate::bom_analysis::domain::Sku;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::AppError;
use crate::shared::Result;

/// DotFormatter adapter rendering a product structure as a Graphviz digraph
///
/// Only edge listings have a graph shape; every other result is refused
/// with `AppError::UnsupportedFormat`.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(sku: &Sku) -> String {
        format!("\"{}\"", sku.as_str().replace('\\', "\\\\").replace('"', "\\\""))
    }

    fn render_edges(&self, root: &Sku, edges: &[(Sku, Sku)]) -> String {
        let mut output = format!("digraph {} {{\n", Self::quote(root));
        output.push_str("    node [shape=box];\n");
        output.push_str(&format!("    {};\n", Self::quote(root)));
        for (parent, component) in edges {
            output.push_str(&format!(
                "    {} -> {};\n",
                Self::quote(parent),
                Self::quote(component)
            ));
        }
        output.push_str("}\n");
        output
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for DotFormatter {
    fn format(&self, response: &QueryResponse) -> Result<String> {
        match &response.result {
            QueryResult::Edges { root, edges } => Ok(self.render_edges(root, edges)),
            other => Err(AppError::UnsupportedFormat {
                format: "dot".to_string(),
                query: other.name().to_string(),
                hint: "Use the edges subcommand for a graph, or pick --format json or markdown"
                    .to_string(),
            }
            .into()),
        }
    }
}
