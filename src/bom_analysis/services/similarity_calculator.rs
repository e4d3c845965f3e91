use super::BomTraversal;
use crate::bom_analysis::domain::{
    BillOfMaterials, BomError, BomResult, LeafClosure, Quantity, SimilarityMatrix,
    SimilarityReport, Sku,
};
use crate::bom_analysis::policies::{round_to, PROPORTION_DECIMALS};

/// SimilarityCalculator service comparing products by leaf overlap.
///
/// The proportion is `overlap / (total_a + total_b - overlap)` where
/// `overlap` sums `min(qty_a, qty_b)` over the leaves both closures share.
pub struct SimilarityCalculator<'a> {
    traversal: BomTraversal<'a>,
}

impl<'a> SimilarityCalculator<'a> {
    pub fn new(bom: &'a BillOfMaterials) -> Self {
        Self {
            traversal: BomTraversal::new(bom),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.traversal = self.traversal.with_max_depth(max_depth);
        self
    }

    /// Similarity proportion in `[0, 1]` between two caller-supplied SKUs.
    ///
    /// Identical SKUs return exactly 1.0 without walking the table.
    pub fn similarity(&self, sku_a: &str, sku_b: &str) -> BomResult<f64> {
        let sku_a = Sku::from_caller_input(sku_a);
        let sku_b = Sku::from_caller_input(sku_b);
        if sku_a == sku_b {
            return Ok(1.0);
        }
        Ok(self.compare(sku_a, sku_b)?.proportion())
    }

    /// Same comparison as `similarity`, keeping the intermediate quantities.
    ///
    /// Identical SKUs short-circuit the same way and carry no quantities.
    pub fn report(&self, sku_a: &str, sku_b: &str) -> BomResult<SimilarityReport> {
        let sku_a = Sku::from_caller_input(sku_a);
        let sku_b = Sku::from_caller_input(sku_b);
        if sku_a == sku_b {
            return Ok(SimilarityReport::identical(sku_a, sku_b));
        }
        self.compare(sku_a, sku_b)
    }

    /// Pairwise proportions for `skus`. Each unordered pair is computed once.
    ///
    /// `on_pair` is called after every computed pair with `(done, total)`.
    pub fn matrix<F>(&self, skus: &[Sku], mut on_pair: F) -> BomResult<SimilarityMatrix>
    where
        F: FnMut(usize, usize),
    {
        let n = skus.len();
        let total_pairs = n * n.saturating_sub(1) / 2;
        let mut rows = vec![vec![1.0; n]; n];
        let mut done = 0;

        for i in 0..n {
            for j in (i + 1)..n {
                let proportion = if skus[i] == skus[j] {
                    1.0
                } else {
                    self.compare(skus[i].clone(), skus[j].clone())?
                        .proportion()
                };
                rows[i][j] = proportion;
                rows[j][i] = proportion;
                done += 1;
                on_pair(done, total_pairs);
            }
        }

        Ok(SimilarityMatrix::new(skus.to_vec(), rows))
    }

    fn compare(&self, sku_a: Sku, sku_b: Sku) -> BomResult<SimilarityReport> {
        let leaves_a = self.traversal.leaf_quantity_closure(&sku_a, Quantity::ONE)?;
        let leaves_b = self.traversal.leaf_quantity_closure(&sku_b, Quantity::ONE)?;

        let overlap = Self::overlap(&leaves_a, &leaves_b);
        let total = (leaves_a.total() + leaves_b.total()) - overlap;
        if total == 0.0 {
            return Err(BomError::DegenerateTotal {
                sku_a: sku_a.to_string(),
                sku_b: sku_b.to_string(),
            });
        }

        let proportion = round_to(overlap / total, PROPORTION_DECIMALS);
        Ok(SimilarityReport::new(sku_a, sku_b, overlap, total, proportion))
    }

    /// Sum of the smaller quantity over shared leaves, accumulated in
    /// ascending SKU order so the result does not depend on argument order.
    fn overlap(leaves_a: &LeafClosure, leaves_b: &LeafClosure) -> f64 {
        let mut shared: Vec<(&Sku, f64)> = leaves_a
            .iter()
            .filter_map(|entry| {
                leaves_b
                    .get(&entry.sku)
                    .map(|qty_b| (&entry.sku, entry.quantity.min(qty_b)))
            })
            .collect();
        shared.sort_by(|a, b| a.0.cmp(b.0));

        shared.iter().fold(0.0, |acc, (_, qty)| acc + qty)
    }
}
