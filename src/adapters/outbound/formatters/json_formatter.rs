use crate::application::dto::QueryResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering a query response as pretty-printed JSON
///
/// The result object carries a `"query"` tag naming the query kind.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &QueryResponse) -> Result<String> {
        serde_json::to_string_pretty(response).map_err(|e| {
            anyhow::anyhow!(
                "Failed to serialize {} result: {}",
                response.result.name(),
                e
            )
        })
    }
}
