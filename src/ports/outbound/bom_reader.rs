use crate::bom_analysis::domain::BillOfMaterials;
use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading the parent/component table
///
/// This port abstracts where the BoM comes from; the domain only ever
/// sees the loaded, immutable `BillOfMaterials`.
pub trait BomReader {
    /// Loads the BoM stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - A record has fewer than three columns
    /// - A QtyPer value is not a positive number
    fn read_bom(&self, path: &Path) -> Result<BillOfMaterials>;
}
