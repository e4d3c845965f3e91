use crate::application::dto::{QueryResponse, QueryResult};
use crate::bom_analysis::domain::{
    LeafClosure, ReportMetadata, SimilarityMatrix, SimilarityReport, Sku,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const SKU_TABLE_HEADER: &str = "| # | SKU |\n";
const SKU_TABLE_SEPARATOR: &str = "|---|-----|\n";

const EDGE_TABLE_HEADER: &str = "| Parent | Component |\n";
const EDGE_TABLE_SEPARATOR: &str = "|--------|-----------|\n";

const CLOSURE_TABLE_HEADER: &str = "| Leaf SKU | Quantity |\n";
const CLOSURE_TABLE_SEPARATOR: &str = "|----------|---------:|\n";

/// MarkdownFormatter adapter rendering a query response as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(sku: &Sku) -> String {
        format!("`{}`", Self::escape_cell(sku.as_str()))
    }

    fn render_header(&self, output: &mut String, title: &str, metadata: &ReportMetadata) {
        output.push_str(&format!("# {}\n\n", title));
        output.push_str(&format!(
            "*Generated by {} {} at {} from {} BoM row(s)*\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp(),
            metadata.bom_rows()
        ));
    }

    fn render_sku_list(&self, output: &mut String, skus: &[Sku], empty_note: &str) {
        if skus.is_empty() {
            output.push_str(&format!("*{}*\n", empty_note));
            return;
        }

        output.push_str(SKU_TABLE_HEADER);
        output.push_str(SKU_TABLE_SEPARATOR);
        for (index, sku) in skus.iter().enumerate() {
            output.push_str(&format!("| {} | {} |\n", index + 1, Self::cell(sku)));
        }
    }

    fn render_edges(&self, output: &mut String, edges: &[(Sku, Sku)]) {
        if edges.is_empty() {
            output.push_str("*No components*\n");
            return;
        }

        output.push_str(EDGE_TABLE_HEADER);
        output.push_str(EDGE_TABLE_SEPARATOR);
        for (parent, component) in edges {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::cell(parent),
                Self::cell(component)
            ));
        }
    }

    fn render_closure(&self, output: &mut String, closure: &LeafClosure) {
        if closure.is_empty() {
            output.push_str("*No leaf components*\n");
            return;
        }

        output.push_str(CLOSURE_TABLE_HEADER);
        output.push_str(CLOSURE_TABLE_SEPARATOR);
        for entry in closure.iter() {
            output.push_str(&format!(
                "| {} | {:.3} |\n",
                Self::cell(&entry.sku),
                entry.quantity
            ));
        }
        output.push_str(&format!("| **Total** | **{:.3}** |\n", closure.total()));
    }

    fn render_similarity(&self, output: &mut String, report: &SimilarityReport) {
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|------:|\n");
        if let Some(overlap) = report.overlap_quantity() {
            output.push_str(&format!("| Overlap quantity | {:.3} |\n", overlap));
        }
        if let Some(total) = report.total_quantity() {
            output.push_str(&format!("| Total quantity | {:.3} |\n", total));
        }
        output.push_str(&format!(
            "| Proportion | {:.2} ({}%) |\n",
            report.proportion(),
            report.percent()
        ));
    }

    fn render_matrix(&self, output: &mut String, matrix: &SimilarityMatrix) {
        if matrix.is_empty() {
            output.push_str("*No products to compare*\n");
            return;
        }

        output.push_str("| SKU |");
        for sku in matrix.skus() {
            output.push_str(&format!(" {} |", Self::cell(sku)));
        }
        output.push_str("\n|-----|");
        output.push_str(&"----:|".repeat(matrix.len()));
        output.push('\n');

        for (sku, row) in matrix.skus().iter().zip(matrix.rows()) {
            output.push_str(&format!("| {} |", Self::cell(sku)));
            for proportion in row {
                output.push_str(&format!(" {:.2} |", proportion));
            }
            output.push('\n');
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &QueryResponse) -> Result<String> {
        let mut output = String::new();
        let metadata = &response.metadata;

        match &response.result {
            QueryResult::Components { root, skus } => {
                self.render_header(&mut output, &format!("Components of {}", root), metadata);
                self.render_sku_list(&mut output, skus, "No components");
            }
            QueryResult::Usage { root, skus } => {
                self.render_header(&mut output, &format!("Where {} is used", root), metadata);
                self.render_sku_list(&mut output, skus, "Not used by any assembly");
            }
            QueryResult::TopLevel { root, skus } => {
                self.render_header(
                    &mut output,
                    &format!("Top-level products using {}", root),
                    metadata,
                );
                self.render_sku_list(&mut output, skus, "Not used by any product");
            }
            QueryResult::Leaves { root, skus } => {
                self.render_header(&mut output, &format!("Leaf components of {}", root), metadata);
                self.render_sku_list(&mut output, skus, "No leaf components");
            }
            QueryResult::Edges { root, edges } => {
                self.render_header(&mut output, &format!("Structure of {}", root), metadata);
                self.render_edges(&mut output, edges);
            }
            QueryResult::Closure {
                root,
                quantity,
                closure,
            } => {
                self.render_header(
                    &mut output,
                    &format!("Leaf quantities for {} x {}", quantity, root),
                    metadata,
                );
                self.render_closure(&mut output, closure);
            }
            QueryResult::Similarity(report) => {
                self.render_header(
                    &mut output,
                    &format!("Similarity of {} and {}", report.sku_a(), report.sku_b()),
                    metadata,
                );
                self.render_similarity(&mut output, report);
            }
            QueryResult::Matrix(matrix) => {
                self.render_header(&mut output, "Similarity matrix", metadata);
                self.render_matrix(&mut output, matrix);
            }
        }

        Ok(output)
    }
}
