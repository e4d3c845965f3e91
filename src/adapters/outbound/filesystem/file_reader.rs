use crate::bom_analysis::domain::{BillOfMaterials, Sku};
use crate::ports::outbound::{BomReader, SkuListReader};
use crate::shared::error::AppError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// FileSystemReader adapter for reading CSV tables from the file system
///
/// Implements both BomReader and SkuListReader. Both files carry a header
/// row; columns are taken by position, not by header name.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads every CSV record of `path` as raw, untrimmed strings.
    ///
    /// Records may have differing column counts; shape is checked by the
    /// caller so a short row is reported as a malformed table.
    fn read_records(&self, path: &Path, file_type: &str) -> Result<Vec<Vec<String>>> {
        if !path.exists() {
            return Err(AppError::BomFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The {} file does not exist. Check the path, or set it in bomsim.config.yml.",
                    file_type
                ),
            }
            .into());
        }

        let content = read_checked(path, file_type).map_err(|e| AppError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(content.as_bytes());

        reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                    .map_err(|e| {
                        anyhow::Error::from(AppError::CsvParseError {
                            path: path.to_path_buf(),
                            details: e.to_string(),
                        })
                    })
            })
            .collect()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for FileSystemReader {
    fn read_bom(&self, path: &Path) -> Result<BillOfMaterials> {
        let records = self.read_records(path, "BoM")?;

        BillOfMaterials::from_records(records)
            .with_context(|| format!("Invalid BoM table: {}", path.display()))
    }
}

impl SkuListReader for FileSystemReader {
    fn read_skus(&self, path: &Path) -> Result<Vec<Sku>> {
        let records = self.read_records(path, "SKU list")?;

        Ok(records
            .into_iter()
            .filter_map(|record| record.into_iter().next())
            .filter(|sku| !sku.trim().is_empty())
            .map(Sku::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_analysis::domain::BomError;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_bom_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "bom.csv",
            "Parent,Component,QtyPer\nPROD012,L1003,2\nL1003,L2007, 1.5\n",
        );

        let bom = FileSystemReader::new().read_bom(&path).unwrap();

        assert_eq!(bom.len(), 2);
        assert_eq!(bom.entries()[1].component.as_str(), "L2007");
        assert_eq!(bom.entries()[1].quantity_per, 1.5);
    }

    #[test]
    fn test_read_bom_keeps_sku_cells_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "bom.csv", "Parent,Component,QtyPer
PROD012, L1003,2 
");

        let bom = FileSystemReader::new().read_bom(&path).unwrap();

        assert_eq!(bom.entries()[0].component.as_str(), " L1003");
        assert_eq!(bom.entries()[0].quantity_per, 2.0);
    }

    #[test]
    fn test_read_bom_keeps_numeric_looking_skus() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "bom.csv", "Parent,Component,QtyPer\n00123,5374,1\n");

        let bom = FileSystemReader::new().read_bom(&path).unwrap();

        assert_eq!(bom.entries()[0].parent.as_str(), "00123");
        assert!(bom.is_component(&Sku::from(5374u32)));
    }

    #[test]
    fn test_read_bom_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_bom(&temp_dir.path().join("missing.csv"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("BoM file not found"));
    }

    #[test]
    fn test_read_bom_short_record_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "bom.csv",
            "Parent,Component,QtyPer\nPROD012,L1003,2\nPROD012,L1009\n",
        );

        let err = FileSystemReader::new().read_bom(&path).unwrap_err();

        assert!(format!("{}", err).contains("Invalid BoM table"));
        assert_eq!(
            err.downcast_ref::<BomError>(),
            Some(&BomError::MalformedTable {
                record: 2,
                columns: 2
            })
        );
    }

    #[test]
    fn test_read_bom_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_bom(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read file"));
    }

    #[test]
    fn test_read_skus_first_column_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "skus.csv",
            "SKU\nPROD000\nPROD001,ignored\n\nPROD002\n",
        );

        let skus = FileSystemReader::new().read_skus(&path).unwrap();

        let codes: Vec<&str> = skus.iter().map(Sku::as_str).collect();
        assert_eq!(codes, vec!["PROD000", "PROD001", "PROD002"]);
    }

    #[test]
    fn test_read_skus_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "skus.csv", "SKU\n");

        assert!(FileSystemReader::new().read_skus(&path).unwrap().is_empty());
    }
}
