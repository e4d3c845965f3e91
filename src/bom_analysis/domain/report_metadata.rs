use serde::Serialize;

/// ReportMetadata value object stamped on every rendered result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    bom_rows: usize,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, bom_rows: usize) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            bom_rows,
        }
    }

    /// Metadata for a report generated now against a table of `bom_rows` rows
    pub fn generate(bom_rows: usize) -> Self {
        Self::new(
            chrono::Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            bom_rows,
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn bom_rows(&self) -> usize {
        self.bom_rows
    }
}
