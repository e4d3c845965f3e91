use crate::bom_analysis::domain::{
    LeafClosure, Quantity, ReportMetadata, SimilarityMatrix, SimilarityReport, Sku,
};
use serde::Serialize;

/// Result payload of a single BoM query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryResult {
    Components { root: Sku, skus: Vec<Sku> },
    Usage { root: Sku, skus: Vec<Sku> },
    TopLevel { root: Sku, skus: Vec<Sku> },
    Edges { root: Sku, edges: Vec<(Sku, Sku)> },
    Leaves { root: Sku, skus: Vec<Sku> },
    Closure {
        root: Sku,
        quantity: Quantity,
        closure: LeafClosure,
    },
    Similarity(SimilarityReport),
    Matrix(SimilarityMatrix),
}

impl QueryResult {
    pub fn name(&self) -> &'static str {
        match self {
            QueryResult::Components { .. } => "components",
            QueryResult::Usage { .. } => "usage",
            QueryResult::TopLevel { .. } => "top-level",
            QueryResult::Edges { .. } => "edges",
            QueryResult::Leaves { .. } => "leaves",
            QueryResult::Closure { .. } => "closure",
            QueryResult::Similarity(_) => "similarity",
            QueryResult::Matrix(_) => "matrix",
        }
    }
}

/// QueryResponse - response DTO handed to formatters
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub metadata: ReportMetadata,
    pub result: QueryResult,
}

impl QueryResponse {
    pub fn new(metadata: ReportMetadata, result: QueryResult) -> Self {
        Self { metadata, result }
    }
}
