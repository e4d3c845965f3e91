use super::Sku;
use crate::bom_analysis::policies::{round_to, CLOSURE_DECIMALS};
use serde::Serialize;
use std::collections::BTreeMap;

/// A leaf SKU with its aggregated quantity per build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosureEntry {
    pub sku: Sku,
    pub quantity: f64,
}

/// Leaf-level quantity closure of a root SKU.
///
/// Each leaf appears once. Entries are ordered by ascending quantity; equal
/// quantities keep ascending SKU order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct LeafClosure {
    entries: Vec<ClosureEntry>,
}

impl LeafClosure {
    /// Aggregates per-path `(leaf, quantity)` pairs into a closure.
    ///
    /// Quantities of the same leaf are summed in path order and the sum is
    /// rounded once; individual path quantities are never rounded.
    pub fn from_path_quantities(paths: impl IntoIterator<Item = (Sku, f64)>) -> Self {
        let mut grouped: BTreeMap<Sku, f64> = BTreeMap::new();
        for (sku, quantity) in paths {
            *grouped.entry(sku).or_insert(0.0) += quantity;
        }

        let mut entries: Vec<ClosureEntry> = grouped
            .into_iter()
            .map(|(sku, sum)| ClosureEntry {
                sku,
                quantity: round_to(sum, CLOSURE_DECIMALS),
            })
            .collect();
        entries.sort_by(|a, b| a.quantity.total_cmp(&b.quantity));

        Self { entries }
    }

    pub fn entries(&self) -> &[ClosureEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClosureEntry> {
        self.entries.iter()
    }

    pub fn get(&self, sku: &Sku) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| &entry.sku == sku)
            .map(|entry| entry.quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all leaf quantities, accumulated in closure order
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |acc, entry| acc + entry.quantity)
    }

    pub fn skus(&self) -> impl Iterator<Item = &Sku> {
        self.entries.iter().map(|entry| &entry.sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, f64)]) -> Vec<(Sku, f64)> {
        items
            .iter()
            .map(|(sku, qty)| (Sku::from(*sku), *qty))
            .collect()
    }

    #[test]
    fn test_shared_leaf_is_summed_not_maxed() {
        let closure =
            LeafClosure::from_path_quantities(pairs(&[("L2016", 3.0), ("L2016", 2.0), ("L2016", 0.25)]));
        assert_eq!(closure.len(), 1);
        assert_eq!(closure.get(&Sku::from("L2016")), Some(5.25));
    }

    #[test]
    fn test_sum_is_rounded_once() {
        // Each path rounds down on its own (0.0004 -> 0.0) but the sum does not
        let closure = LeafClosure::from_path_quantities(pairs(&[
            ("L2000", 0.0004),
            ("L2000", 0.0004),
        ]));
        assert_eq!(closure.get(&Sku::from("L2000")), Some(0.001));
    }

    #[test]
    fn test_sorted_by_quantity_with_sku_tie_break() {
        let closure = LeafClosure::from_path_quantities(pairs(&[
            ("L2042", 9.0),
            ("L2030", 0.5),
            ("L2029", 0.5),
            ("L2007", 3.0),
        ]));
        let order: Vec<&str> = closure.skus().map(Sku::as_str).collect();
        assert_eq!(order, vec!["L2029", "L2030", "L2007", "L2042"]);
    }

    #[test]
    fn test_total_and_lookup() {
        let closure = LeafClosure::from_path_quantities(pairs(&[("A", 1.5), ("B", 2.0)]));
        assert_eq!(closure.total(), 3.5);
        assert_eq!(closure.get(&Sku::from("A")), Some(1.5));
        assert_eq!(closure.get(&Sku::from("C")), None);
    }

    #[test]
    fn test_serializes_as_list_of_entries() {
        let closure = LeafClosure::from_path_quantities(pairs(&[("L2024", 0.125)]));
        let json = serde_json::to_string(&closure).unwrap();
        assert_eq!(json, r#"[{"sku":"L2024","quantity":0.125}]"#);
    }
}
