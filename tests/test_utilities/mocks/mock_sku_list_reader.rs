use std::path::Path;
use bomsim::prelude::*;

/// Mock SkuListReader returning a fixed list
#[derive(Default)]
pub struct MockSkuListReader {
    pub skus: Vec<&'static str>,
}

impl MockSkuListReader {
    pub fn new(skus: Vec<&'static str>) -> Self {
        Self { skus }
    }
}

impl SkuListReader for MockSkuListReader {
    fn read_skus(&self, _path: &Path) -> Result<Vec<Sku>> {
        Ok(self.skus.iter().copied().map(Sku::from).collect())
    }
}
