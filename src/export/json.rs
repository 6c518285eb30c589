//! JSON Export functionality
//!
//! Exports the ledger in the same shape it is saved in, so an export can be
//! imported back on another machine.

use std::io::Write;

use serde_json::Value;

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::Ledger;
use crate::storage::LedgerSnapshot;

/// Export the ledger to JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> SmartSaveResult<()> {
    let snapshot = LedgerSnapshot::from(ledger);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &snapshot)
    } else {
        serde_json::to_writer(&mut *writer, &snapshot)
    };
    result.map_err(|e| SmartSaveError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SmartSaveError::Export(e.to_string()))?;
    Ok(())
}

/// Parse a JSON export into a document ready to merge
pub fn import_from_json(json_str: &str) -> SmartSaveResult<Value> {
    serde_json::from_str(json_str)
        .map_err(|e| SmartSaveError::MalformedPersistedState(format!("Invalid JSON: {}", e)))
}
