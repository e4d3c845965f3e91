use super::{BomEntry, BomError, BomResult, Sku};
use std::collections::HashMap;

/// BillOfMaterials aggregate: the immutable parent/component table.
///
/// Rows keep their load order. Two indexes (by parent, by component) are
/// built once so each traversal step is a lookup rather than a table scan.
#[derive(Debug, Clone, Default)]
pub struct BillOfMaterials {
    entries: Vec<BomEntry>,
    by_parent: HashMap<Sku, Vec<usize>>,
    by_component: HashMap<Sku, Vec<usize>>,
}

impl BillOfMaterials {
    pub fn new(entries: Vec<BomEntry>) -> Self {
        let mut by_parent: HashMap<Sku, Vec<usize>> = HashMap::new();
        let mut by_component: HashMap<Sku, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            by_parent.entry(entry.parent.clone()).or_default().push(idx);
            by_component
                .entry(entry.component.clone())
                .or_default()
                .push(idx);
        }

        Self {
            entries,
            by_parent,
            by_component,
        }
    }

    /// Builds the table from raw string records (`Parent, Component, QtyPer`).
    ///
    /// Any record with fewer than three columns fails the whole table before
    /// a single row is indexed. Columns beyond the third are ignored.
    /// Parent and Component are kept verbatim; only QtyPer is trimmed.
    /// `record` numbers in errors are 1-based.
    pub fn from_records<I, R, S>(records: I) -> BomResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();

        for (idx, record) in records.into_iter().enumerate() {
            let record = record.as_ref();
            let number = idx + 1;

            if record.len() < 3 {
                return Err(BomError::MalformedTable {
                    record: number,
                    columns: record.len(),
                });
            }

            let parent = record[0].as_ref();
            let component = record[1].as_ref();
            if parent.is_empty() || component.is_empty() {
                return Err(BomError::InvalidSku {
                    record: number,
                    reason: "Parent and Component must not be empty".to_string(),
                });
            }

            let raw_qty = record[2].as_ref().trim();
            let quantity_per: f64 = raw_qty.parse().map_err(|_| BomError::InvalidQuantity {
                value: raw_qty.to_string(),
                reason: format!("QtyPer in record {} is not a number", number),
            })?;

            entries.push(BomEntry::new(parent, component, quantity_per)?);
        }

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[BomEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows whose parent is `sku`, in table order
    pub fn components_of<'a>(&'a self, sku: &Sku) -> impl Iterator<Item = &'a BomEntry> + 'a {
        Self::rows(&self.entries, self.by_parent.get(sku))
    }

    /// Rows whose component is `sku`, in table order
    pub fn parents_of<'a>(&'a self, sku: &Sku) -> impl Iterator<Item = &'a BomEntry> + 'a {
        Self::rows(&self.entries, self.by_component.get(sku))
    }

    /// True when `sku` appears in the Parent column
    pub fn is_parent(&self, sku: &Sku) -> bool {
        self.by_parent.contains_key(sku)
    }

    /// True when `sku` appears in the Component column
    pub fn is_component(&self, sku: &Sku) -> bool {
        self.by_component.contains_key(sku)
    }

    fn rows<'a>(
        entries: &'a [BomEntry],
        indices: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a BomEntry> + 'a {
        indices
            .into_iter()
            .flatten()
            .map(move |&idx| &entries[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BillOfMaterials {
        BillOfMaterials::from_records(vec![
            vec!["PROD012", "L1022", "0.5"],
            vec!["PROD012", "L1003", "2"],
            vec!["L1003", "L2007", "1.5"],
            vec!["PROD001", "L1003", "1"],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_records_keeps_row_order() {
        let bom = sample();
        assert_eq!(bom.len(), 4);
        let components: Vec<&str> = bom
            .components_of(&Sku::from("PROD012"))
            .map(|e| e.component.as_str())
            .collect();
        assert_eq!(components, vec!["L1022", "L1003"]);
    }

    #[test]
    fn test_parents_of() {
        let bom = sample();
        let parents: Vec<&str> = bom
            .parents_of(&Sku::from("L1003"))
            .map(|e| e.parent.as_str())
            .collect();
        assert_eq!(parents, vec!["PROD012", "PROD001"]);
    }

    #[test]
    fn test_unknown_sku_has_no_rows() {
        let bom = sample();
        let missing = Sku::from("NEW_ITEM");
        assert_eq!(bom.components_of(&missing).count(), 0);
        assert_eq!(bom.parents_of(&missing).count(), 0);
        assert!(!bom.is_parent(&missing));
    }

    #[test]
    fn test_is_parent_and_is_component() {
        let bom = sample();
        assert!(bom.is_parent(&Sku::from("L1003")));
        assert!(bom.is_component(&Sku::from("L1003")));
        assert!(!bom.is_parent(&Sku::from("L2007")));
        assert!(!bom.is_component(&Sku::from("PROD012")));
    }

    #[test]
    fn test_from_records_rejects_short_record() {
        let result = BillOfMaterials::from_records(vec![
            vec!["PROD012", "L1003", "2"],
            vec!["PROD012", "L1009"],
        ]);
        assert_eq!(
            result.unwrap_err(),
            BomError::MalformedTable {
                record: 2,
                columns: 2
            }
        );
    }

    #[test]
    fn test_from_records_keeps_sku_whitespace() {
        let bom = BillOfMaterials::from_records(vec![vec![" PROD012", "L1003 ", " 2 "]]).unwrap();
        assert_eq!(bom.entries()[0].parent.as_str(), " PROD012");
        assert_eq!(bom.entries()[0].component.as_str(), "L1003 ");
        assert_eq!(bom.entries()[0].quantity_per, 2.0);
        assert!(!bom.is_parent(&Sku::from("PROD012")));
    }

    #[test]
    fn test_from_records_rejects_non_numeric_qty() {
        let result = BillOfMaterials::from_records(vec![vec!["PROD012", "L1003", "two"]]);
        assert!(matches!(
            result.unwrap_err(),
            BomError::InvalidQuantity { .. }
        ));
    }

    #[test]
    fn test_from_records_rejects_empty_sku() {
        let result = BillOfMaterials::from_records(vec![vec!["", "L1003", "1"]]);
        assert!(matches!(result.unwrap_err(), BomError::InvalidSku { record: 1, .. }));
    }

    #[test]
    fn test_from_records_ignores_extra_columns() {
        let bom =
            BillOfMaterials::from_records(vec![vec!["P", "C", "1.25", "note"]]).unwrap();
        assert_eq!(bom.entries()[0].quantity_per, 1.25);
    }

    #[test]
    fn test_numeric_looking_skus_stay_strings() {
        let bom = BillOfMaterials::from_records(vec![vec!["11111", "00042", "1"]]).unwrap();
        assert_eq!(bom.entries()[0].component.as_str(), "00042");
        assert!(bom.is_parent(&Sku::from(11111u32)));
    }

    #[test]
    fn test_empty_table() {
        let bom = BillOfMaterials::from_records(Vec::<Vec<String>>::new()).unwrap();
        assert!(bom.is_empty());
    }
}
