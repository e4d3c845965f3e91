use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the outbound formatter adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bomsim::application::dto::OutputFormat;
    /// use bomsim::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Dot => Box::new(DotFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bomsim::application::dto::OutputFormat;
    /// use bomsim::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Dot);
    /// assert_eq!(message, "📝 Generating Graphviz DOT output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
            OutputFormat::Dot => "📝 Generating Graphviz DOT output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{QueryResponse, QueryResult};
    use crate::bom_analysis::domain::{ReportMetadata, Sku};

    fn edges_response() -> QueryResponse {
        QueryResponse::new(
            ReportMetadata::new(
                "2024-01-01T00:00:00Z".to_string(),
                "bomsim".to_string(),
                "0.1.0".to_string(),
                1,
            ),
            QueryResult::Edges {
                root: Sku::from("P"),
                edges: vec![(Sku::from("P"), Sku::from("A"))],
            },
        )
    }

    #[test]
    fn test_every_format_renders_edges() {
        let response = edges_response();
        for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Dot] {
            let output = FormatterFactory::create(format).format(&response).unwrap();
            assert!(output.contains('A'), "{} output: {}", format, output);
        }
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON output..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown output..."
        );
    }
}
