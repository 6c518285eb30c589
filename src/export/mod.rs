//! Export module for SmartSave
//!
//! Provides ledger export in multiple formats:
//! - JSON: the saved ledger shape, re-importable
//! - YAML: the same shape, human-readable, re-importable
//! - CSV: expenses only (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

use serde_json::Value;

use crate::error::{SmartSaveError, SmartSaveResult};

pub use self::csv::export_expenses_csv;
pub use json::{export_json, import_from_json};
pub use yaml::{export_yaml, import_from_yaml};

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// JSON format (whole ledger)
    Json,
    /// YAML format (whole ledger, human-readable)
    Yaml,
    /// CSV format (expenses only)
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// Read an import file, choosing the parser by extension
///
/// `.yaml` and `.yml` are parsed as YAML, everything else as JSON.
pub fn read_import_file(path: &Path) -> SmartSaveResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        SmartSaveError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        import_from_yaml(&contents)
    } else {
        import_from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_import_file_by_extension() {
        let temp_dir = TempDir::new().unwrap();

        let yaml_path = temp_dir.path().join("ledger.YML");
        std::fs::write(&yaml_path, "budget: 250\n").unwrap();
        assert_eq!(read_import_file(&yaml_path).unwrap()["budget"], 250);

        let json_path = temp_dir.path().join("ledger.json");
        std::fs::write(&json_path, r#"{"budget": 250}"#).unwrap();
        assert_eq!(read_import_file(&json_path).unwrap()["budget"], 250);

        // YAML content in a .json file is not accepted
        std::fs::write(&json_path, "budget: 250\n").unwrap();
        assert!(read_import_file(&json_path).unwrap_err().is_malformed());
    }

    #[test]
    fn test_read_missing_import_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_import_file(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SmartSaveError::Io(_)));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
