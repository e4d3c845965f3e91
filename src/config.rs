//! Configuration file support for bomsim.
//!
//! Provides YAML-based defaults through `bomsim.config.yml` files:
//! data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bomsim::application::dto::OutputFormat;
use bomsim::shared::Result;

pub const CONFIG_FILENAME: &str = "bomsim.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default BoM CSV
    pub bom: Option<PathBuf>,
    /// Default SKU list for `matrix`
    pub skus: Option<PathBuf>,
    pub format: Option<String>,
    pub max_depth: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Set 'format' to json, markdown or dot.",
            e
        );
    }

    if config.max_depth == Some(0) {
        bail!(
            "Invalid config: max_depth must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default depth limit."
        );
    }

    for (field, path) in [("bom", &config.bom), ("skus", &config.skus)] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n💡 Hint: Give a path to a CSV file.",
                field
            );
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
bom: data/bom.csv
skus: data/skus.csv
format: markdown
max_depth: 25
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.bom, Some(PathBuf::from("data/bom.csv")));
        assert_eq!(config.skus, Some(PathBuf::from("data/skus.csv")));
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Markdown));
        assert_eq!(config.max_depth, Some(25));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: dot\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Dot));
        assert!(config.bom.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/bomsim.config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: xml\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: xml"));
    }

    #[test]
    fn test_zero_max_depth_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "max_depth: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("max_depth must be at least 1"));
    }

    #[test]
    fn test_empty_bom_path_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "bom: \"\"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("bom must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
exclude_packages: [a]
threshold: 0.5
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("exclude_packages"));
        assert!(config.unknown_fields.contains_key("threshold"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.bom.is_none());
        assert!(config.skus.is_none());
        assert_eq!(config.output_format().unwrap(), None);
        assert!(config.max_depth.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
