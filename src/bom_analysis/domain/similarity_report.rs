use super::Sku;
use serde::Serialize;

/// Outcome of comparing the leaf closures of two products.
///
/// The quantities are absent when both SKUs are the same product, since
/// that comparison never walks the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    sku_a: Sku,
    sku_b: Sku,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlap_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_quantity: Option<f64>,
    proportion: f64,
}

impl SimilarityReport {
    pub fn new(
        sku_a: Sku,
        sku_b: Sku,
        overlap_quantity: f64,
        total_quantity: f64,
        proportion: f64,
    ) -> Self {
        Self {
            sku_a,
            sku_b,
            overlap_quantity: Some(overlap_quantity),
            total_quantity: Some(total_quantity),
            proportion,
        }
    }

    /// Report for a product compared with itself
    pub fn identical(sku_a: Sku, sku_b: Sku) -> Self {
        Self {
            sku_a,
            sku_b,
            overlap_quantity: None,
            total_quantity: None,
            proportion: 1.0,
        }
    }

    pub fn sku_a(&self) -> &Sku {
        &self.sku_a
    }

    pub fn sku_b(&self) -> &Sku {
        &self.sku_b
    }

    pub fn overlap_quantity(&self) -> Option<f64> {
        self.overlap_quantity
    }

    pub fn total_quantity(&self) -> Option<f64> {
        self.total_quantity
    }

    /// Overlap over total, rounded to two decimals
    pub fn proportion(&self) -> f64 {
        self.proportion
    }

    /// Proportion as a whole percentage
    pub fn percent(&self) -> u32 {
        (self.proportion * 100.0).round_ties_even() as u32
    }
}

/// Pairwise similarity proportions for a list of products.
///
/// `rows[i][j]` is the proportion between `skus[i]` and `skus[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    skus: Vec<Sku>,
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    pub fn new(skus: Vec<Sku>, rows: Vec<Vec<f64>>) -> Self {
        Self { skus, rows }
    }

    pub fn skus(&self) -> &[Sku] {
        &self.skus
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.skus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }
}
