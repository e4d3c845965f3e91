use crate::bom_analysis::domain::Quantity;
use crate::bom_analysis::services::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

/// The question asked of the BoM
#[derive(Debug, Clone, PartialEq)]
pub enum QueryKind {
    Components { sku: String },
    Usage { sku: String },
    TopLevel { sku: String },
    Edges { sku: String },
    Leaves { sku: String },
    Closure { sku: String, quantity: Quantity },
    Similarity { sku_a: String, sku_b: String },
    Matrix { skus_path: PathBuf },
}

impl QueryKind {
    /// Short name used in progress messages and format errors
    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::Components { .. } => "components",
            QueryKind::Usage { .. } => "usage",
            QueryKind::TopLevel { .. } => "top-level",
            QueryKind::Edges { .. } => "edges",
            QueryKind::Leaves { .. } => "leaves",
            QueryKind::Closure { .. } => "closure",
            QueryKind::Similarity { .. } => "similarity",
            QueryKind::Matrix { .. } => "matrix",
        }
    }
}

/// QueryRequest - request DTO for the BoM query use case
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Path to the BoM CSV (`Parent, Component, QtyPer`)
    pub bom_path: PathBuf,
    pub query: QueryKind,
    /// Nesting depth after which a walk is abandoned
    pub max_depth: usize,
}

impl QueryRequest {
    pub fn new(bom_path: PathBuf, query: QueryKind) -> Self {
        Self {
            bom_path,
            query,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
