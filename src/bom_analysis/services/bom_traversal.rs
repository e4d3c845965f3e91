use super::tree_walker::{ChildOrder, Direction, TreeWalker, WalkVisitor, DEFAULT_MAX_DEPTH};
use crate::bom_analysis::domain::{BillOfMaterials, BomResult, LeafClosure, Quantity, Sku};
use std::collections::HashSet;

/// Collects every SKU reached, once, in first-visit order
#[derive(Default)]
struct UniqueSkus {
    seen: HashSet<Sku>,
    order: Vec<Sku>,
}

impl WalkVisitor for UniqueSkus {
    fn visit_edge(&mut self, _from: &Sku, to: &Sku, _quantity: f64) {
        if self.seen.insert(to.clone()) {
            self.order.push(to.clone());
        }
    }

    fn visit_terminal(&mut self, _sku: &Sku, _quantity: f64) {}
}

/// Collects every traversed edge, duplicates included
#[derive(Default)]
struct Edges {
    edges: Vec<(Sku, Sku)>,
}

impl WalkVisitor for Edges {
    fn visit_edge(&mut self, from: &Sku, to: &Sku, _quantity: f64) {
        self.edges.push((from.clone(), to.clone()));
    }

    fn visit_terminal(&mut self, _sku: &Sku, _quantity: f64) {}
}

/// Collects one `(leaf, path quantity)` pair per root-to-leaf path
#[derive(Default)]
struct LeafPaths {
    paths: Vec<(Sku, f64)>,
}

impl WalkVisitor for LeafPaths {
    fn visit_edge(&mut self, _from: &Sku, _to: &Sku, _quantity: f64) {}

    fn visit_terminal(&mut self, sku: &Sku, quantity: f64) {
        self.paths.push((sku.clone(), quantity));
    }
}

/// BomTraversal service: structural queries over one BoM table.
///
/// Listings (`descendants`, `ancestors_usage`, `direct_edges`) visit
/// neighbours in ascending SKU order; the leaf closure expands rows in
/// table order. All queries are recomputed on every call.
pub struct BomTraversal<'a> {
    bom: &'a BillOfMaterials,
    max_depth: usize,
}

impl<'a> BomTraversal<'a> {
    pub fn new(bom: &'a BillOfMaterials) -> Self {
        Self {
            bom,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// See [`DEFAULT_MAX_DEPTH`] for how depth is counted
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Every SKU below `sku`, pre-order, deduplicated.
    /// Empty when `sku` has no components.
    pub fn descendants(&self, sku: &Sku) -> BomResult<Vec<Sku>> {
        let mut visitor = UniqueSkus::default();
        self.walker(Direction::Down, ChildOrder::Lexicographic)
            .walk(sku, 1.0, &mut visitor)?;
        Ok(visitor.order)
    }

    /// Every SKU that directly or indirectly consumes `sku`, pre-order,
    /// deduplicated. Empty when nothing uses `sku`.
    pub fn ancestors_usage(&self, sku: &Sku) -> BomResult<Vec<Sku>> {
        let mut visitor = UniqueSkus::default();
        self.walker(Direction::Up, ChildOrder::Lexicographic)
            .walk(sku, 1.0, &mut visitor)?;
        Ok(visitor.order)
    }

    /// Every `(parent, component)` edge of the tree rooted at `sku`, in
    /// pre-order. An edge reached through several paths is listed each time.
    pub fn direct_edges(&self, sku: &Sku) -> BomResult<Vec<(Sku, Sku)>> {
        let mut visitor = Edges::default();
        self.walker(Direction::Down, ChildOrder::Lexicographic)
            .walk(sku, 1.0, &mut visitor)?;
        Ok(visitor.edges)
    }

    /// Leaf SKUs needed for `quantity` units of `sku`, with quantities
    /// summed across all paths.
    ///
    /// A leaf or unknown `sku` yields `{sku: quantity}` (rounded).
    pub fn leaf_quantity_closure(&self, sku: &Sku, quantity: Quantity) -> BomResult<LeafClosure> {
        let mut visitor = LeafPaths::default();
        self.walker(Direction::Down, ChildOrder::TableOrder)
            .walk(sku, quantity.value(), &mut visitor)?;
        Ok(LeafClosure::from_path_quantities(visitor.paths))
    }

    /// Descendants of `sku` that are never a parent, in descendant order
    pub fn leaf_components(&self, sku: &Sku) -> BomResult<Vec<Sku>> {
        Ok(self
            .descendants(sku)?
            .into_iter()
            .filter(|descendant| !self.bom.is_parent(descendant))
            .collect())
    }

    /// Ancestors of `sku` that are never a component (top-level products)
    pub fn top_level_usage(&self, sku: &Sku) -> BomResult<Vec<Sku>> {
        Ok(self
            .ancestors_usage(sku)?
            .into_iter()
            .filter(|ancestor| !self.bom.is_component(ancestor))
            .collect())
    }

    fn walker(&self, direction: Direction, order: ChildOrder) -> TreeWalker<'a> {
        TreeWalker::new(self.bom, direction, order).with_max_depth(self.max_depth)
    }
}
