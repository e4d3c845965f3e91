pub mod bill_of_materials;
pub mod bom_entry;
pub mod bom_error;
pub mod leaf_closure;
pub mod quantity;
pub mod report_metadata;
pub mod similarity_report;
pub mod sku;

pub use bill_of_materials::BillOfMaterials;
pub use bom_entry::BomEntry;
pub use bom_error::{BomError, BomResult};
pub use leaf_closure::{ClosureEntry, LeafClosure};
pub use quantity::Quantity;
pub use report_metadata::ReportMetadata;
pub use similarity_report::{SimilarityMatrix, SimilarityReport};
pub use sku::Sku;
