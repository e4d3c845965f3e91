use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// NewType wrapper for a stock-keeping unit code.
///
/// Every SKU is held in string form; numeric codes are converted with their
/// decimal representation so `Sku::from(5374)` equals `Sku::from("5374")`.
/// Ordering is plain lexicographic string ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Normalises a SKU typed by a caller, stripping stray `[`, `]` and `'`
    /// characters from both ends (e.g. `['PROD000']` becomes `PROD000`).
    pub fn from_caller_input(raw: &str) -> Self {
        Self(
            raw.trim_matches(|c| matches!(c, '[' | ']' | '\''))
                .to_string(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sku {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Sku {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&String> for Sku {
    fn from(code: &String) -> Self {
        Self(code.clone())
    }
}

macro_rules! sku_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Sku {
                fn from(code: $int) -> Self {
                    Self(code.to_string())
                }
            }
        )*
    };
}

sku_from_integer!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_numeric_sku_equals_string_form() {
        assert_eq!(Sku::from(5374u32), Sku::from("5374"));
        assert_eq!(Sku::from(11111i64).as_str(), "11111");
    }

    #[test]
    fn test_from_caller_input_strips_brackets_and_quotes() {
        assert_eq!(Sku::from_caller_input("['PROD000']").as_str(), "PROD000");
        assert_eq!(Sku::from_caller_input("'L2024'").as_str(), "L2024");
        assert_eq!(Sku::from_caller_input("PROD000").as_str(), "PROD000");
    }

    #[test]
    fn test_from_caller_input_keeps_inner_characters() {
        assert_eq!(Sku::from_caller_input("A'B").as_str(), "A'B");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut skus = vec![Sku::from("L2030"), Sku::from("L1003"), Sku::from("L2007")];
        skus.sort();
        let codes: Vec<&str> = skus.iter().map(Sku::as_str).collect();
        assert_eq!(codes, vec!["L1003", "L2007", "L2030"]);
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Sku::from("PROD012"), 1);
        assert_eq!(map.get("PROD012"), Some(&1));
    }

    #[test]
    fn test_sku_display() {
        assert_eq!(format!("{}", Sku::from("L1022")), "L1022");
    }
}
