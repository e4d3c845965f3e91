use super::{BomError, BomResult, Sku};
use serde::Serialize;

/// One row of the BoM: `quantity_per` units of `component` per unit of `parent`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomEntry {
    pub parent: Sku,
    pub component: Sku,
    pub quantity_per: f64,
}

impl BomEntry {
    pub fn new(
        parent: impl Into<Sku>,
        component: impl Into<Sku>,
        quantity_per: f64,
    ) -> BomResult<Self> {
        if !quantity_per.is_finite() || quantity_per <= 0.0 {
            return Err(BomError::InvalidQuantity {
                value: quantity_per.to_string(),
                reason: "QtyPer must be a positive number".to_string(),
            });
        }

        Ok(Self {
            parent: parent.into(),
            component: component.into(),
            quantity_per,
        })
    }
}
