use crate::bom_analysis::domain::Sku;
use crate::shared::Result;
use std::path::Path;

/// SkuListReader port for loading a single-column list of product SKUs
pub trait SkuListReader {
    /// Loads the SKUs stored at `path`, in file order
    fn read_skus(&self, path: &Path) -> Result<Vec<Sku>>;
}
