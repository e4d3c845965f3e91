use std::path::Path;
use bomsim::prelude::*;

/// Mock BomReader serving an in-memory table
pub struct MockBomReader {
    pub rows: Vec<(&'static str, &'static str, f64)>,
    pub should_fail: bool,
}

impl MockBomReader {
    pub fn new(rows: Vec<(&'static str, &'static str, f64)>) -> Self {
        Self {
            rows,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl BomReader for MockBomReader {
    fn read_bom(&self, _path: &Path) -> Result<BillOfMaterials> {
        if self.should_fail {
            anyhow::bail!("Mock BoM read failure");
        }
        let entries = self
            .rows
            .iter()
            .map(|(parent, component, qty)| BomEntry::new(*parent, *component, *qty))
            .collect::<BomResult<Vec<_>>>()?;
        Ok(BillOfMaterials::new(entries))
    }
}
