//! YAML Export functionality
//!
//! Exports the ledger to YAML format for human-readable backup.

use std::io::Write;

use chrono::Utc;
use serde_json::Value;

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::Ledger;
use crate::storage::LedgerSnapshot;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> SmartSaveResult<()> {
    let snapshot = LedgerSnapshot::from(ledger);
    let export_err = |e: std::io::Error| SmartSaveError::Export(e.to_string());

    // Add a header comment
    writeln!(writer, "# SmartSave Ledger Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", Utc::now().to_rfc3339()).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION")).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(writer, "# Import it again with `smartsave import <file>`.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| SmartSaveError::Export(e.to_string()))?;

    Ok(())
}

/// Parse a YAML export into a document ready to merge
pub fn import_from_yaml(yaml_str: &str) -> SmartSaveResult<Value> {
    serde_yaml::from_str(yaml_str)
        .map_err(|e| SmartSaveError::MalformedPersistedState(format!("Invalid YAML: {}", e)))
}
