use thiserror::Error;

/// Result alias for the pure domain layer
pub type BomResult<T> = std::result::Result<T, BomError>;

/// Errors raised while building a BoM table or walking it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BomError {
    #[error("Malformed BoM table: record {record} has {columns} column(s), expected at least 3 (Parent, Component, QtyPer)")]
    MalformedTable { record: usize, columns: usize },

    #[error("Invalid quantity '{value}': {reason}")]
    InvalidQuantity { value: String, reason: String },

    #[error("Invalid SKU in record {record}: {reason}")]
    InvalidSku { record: usize, reason: String },

    #[error("Cycle detected in BoM: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("Maximum traversal depth ({max_depth}) exceeded below SKU '{sku}'")]
    DepthLimitExceeded { sku: String, max_depth: usize },

    #[error("Total leaf quantity of '{sku_a}' and '{sku_b}' is zero; similarity is undefined")]
    DegenerateTotal { sku_a: String, sku_b: String },
}
