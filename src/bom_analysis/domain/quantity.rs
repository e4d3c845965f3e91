use super::{BomError, BomResult};
use serde::Serialize;
use std::str::FromStr;

/// A requested build quantity of a root SKU.
///
/// Always finite and non-negative. Numeric strings such as `"4"` parse;
/// anything else is rejected at the boundary with `BomError::InvalidQuantity`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Quantity(f64);

impl Quantity {
    pub const ONE: Quantity = Quantity(1.0);

    pub fn new(value: f64) -> BomResult<Self> {
        if !value.is_finite() {
            return Err(BomError::InvalidQuantity {
                value: value.to_string(),
                reason: "quantity must be a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(BomError::InvalidQuantity {
                value: value.to_string(),
                reason: "quantity must not be negative".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl FromStr for Quantity {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| BomError::InvalidQuantity {
            value: s.to_string(),
            reason: "not a number".to_string(),
        })?;
        Self::new(value)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
