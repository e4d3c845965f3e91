use crate::application::dto::QueryResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering query results
///
/// Implemented once per output format (JSON, Markdown, Graphviz DOT).
pub trait ReportFormatter {
    /// Renders `response` as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails or the format cannot
    /// express this kind of result.
    fn format(&self, response: &QueryResponse) -> Result<String>;
}
