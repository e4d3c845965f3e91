use crate::bom_analysis::domain::{BillOfMaterials, BomError, BomResult, Sku};
use std::collections::HashSet;

/// Maximum nesting depth followed before a walk is abandoned.
///
/// Depth counts edge levels below the root: a root with only direct
/// components has depth 1. A walk fails as soon as it would expand a node
/// beyond this many levels. Real BoMs are a handful of levels deep.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Which column a walk follows from a node to its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Parent to component (what a SKU is built from)
    Down,
    /// Component to parent (what a SKU is used in)
    Up,
}

/// Order in which a node's neighbours are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOrder {
    /// Ascending SKU string
    Lexicographic,
    /// BoM row order
    TableOrder,
}

/// Receives the events of a depth-first walk.
///
/// The walker owns traversal; visitors own the merge policy.
pub trait WalkVisitor {
    /// Called for every traversed edge, in pre-order. `quantity` is the
    /// running product of `quantity_per` along the path (Down walks only).
    fn visit_edge(&mut self, from: &Sku, to: &Sku, quantity: f64);

    /// Called for every node with no neighbours in the walk direction,
    /// including a root that has none.
    fn visit_terminal(&mut self, sku: &Sku, quantity: f64);
}

struct Frame {
    sku: Sku,
    neighbours: std::vec::IntoIter<(Sku, f64)>,
}

/// Iterative pre-order depth-first walker over a BoM.
///
/// Keeps the SKUs on the current root-to-node path so that re-entering one
/// fails with `CycleDetected`. A SKU reached again through a different path
/// (a shared sub-component) is walked again; that is not a cycle.
pub struct TreeWalker<'a> {
    bom: &'a BillOfMaterials,
    direction: Direction,
    order: ChildOrder,
    max_depth: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(bom: &'a BillOfMaterials, direction: Direction, order: ChildOrder) -> Self {
        Self {
            bom,
            direction,
            order,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits the walk to `max_depth` edge levels below the root.
    /// A BoM whose deepest edge sits at level `d` needs `max_depth >= d`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn walk<V: WalkVisitor>(&self, root: &Sku, quantity: f64, visitor: &mut V) -> BomResult<()> {
        let root_neighbours = self.neighbours(root, quantity);
        if root_neighbours.is_empty() {
            visitor.visit_terminal(root, quantity);
            return Ok(());
        }

        let mut on_path: HashSet<Sku> = HashSet::from([root.clone()]);
        let mut stack = vec![Frame {
            sku: root.clone(),
            neighbours: root_neighbours.into_iter(),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some((next, next_quantity)) = frame.neighbours.next() else {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.sku);
                }
                continue;
            };
            let current = frame.sku.clone();

            if on_path.contains(&next) {
                let mut path: Vec<String> = stack.iter().map(|f| f.sku.to_string()).collect();
                path.push(next.to_string());
                return Err(BomError::CycleDetected { path });
            }

            visitor.visit_edge(&current, &next, next_quantity);

            let neighbours = self.neighbours(&next, next_quantity);
            if neighbours.is_empty() {
                visitor.visit_terminal(&next, next_quantity);
                continue;
            }

            if stack.len() >= self.max_depth {
                return Err(BomError::DepthLimitExceeded {
                    sku: next.to_string(),
                    max_depth: self.max_depth,
                });
            }

            on_path.insert(next.clone());
            stack.push(Frame {
                sku: next,
                neighbours: neighbours.into_iter(),
            });
        }

        Ok(())
    }

    fn neighbours(&self, sku: &Sku, quantity: f64) -> Vec<(Sku, f64)> {
        let mut neighbours: Vec<(Sku, f64)> = match self.direction {
            Direction::Down => self
                .bom
                .components_of(sku)
                .map(|entry| (entry.component.clone(), entry.quantity_per * quantity))
                .collect(),
            Direction::Up => self
                .bom
                .parents_of(sku)
                .map(|entry| (entry.parent.clone(), quantity))
                .collect(),
        };

        if self.order == ChildOrder::Lexicographic {
            neighbours.sort_by(|a, b| a.0.cmp(&b.0));
        }

        neighbours
    }
}
