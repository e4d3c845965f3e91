pub mod bom_traversal;
pub mod similarity_calculator;
pub mod tree_walker;

pub use bom_traversal::BomTraversal;
pub use similarity_calculator::SimilarityCalculator;
pub use tree_walker::{ChildOrder, Direction, TreeWalker, WalkVisitor, DEFAULT_MAX_DEPTH};
