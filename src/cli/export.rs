//! CLI commands for data export and import

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::settings::Settings;
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::export::{export_expenses_csv, export_json, export_yaml, read_import_file, ExportFormat};
use crate::models::Ledger;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export the ledger to `output`, or to stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SmartSaveResult<()> {
    let ledger = storage.ledger.get()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SmartSaveError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&ledger, settings, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SmartSaveError::Export(e.to_string()))?;

            info!(path = %path.display(), format = format.extension(), "exported ledger");
            eprintln!("Exported {} to {}", format.extension().to_uppercase(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&ledger, settings, format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    ledger: &Ledger,
    settings: &Settings,
    format: ExportFormat,
    writer: &mut W,
) -> SmartSaveResult<()> {
    match format {
        ExportFormat::Json => export_json(ledger, writer, settings.pretty_export),
        ExportFormat::Yaml => export_yaml(ledger, writer),
        ExportFormat::Csv => export_expenses_csv(ledger, writer, &settings.date_format),
    }
}

/// Merge a JSON or YAML export over the current ledger
pub fn handle_import_command(storage: &Storage, path: &Path) -> SmartSaveResult<()> {
    let value = read_import_file(path)?;
    LedgerService::new(storage).import(&value)?;

    let ledger = storage.ledger.get()?;
    println!("Imported {}", path.display());
    println!(
        "  Budget: {}  Expenses: {}  Goals: {}",
        ledger.budget(),
        ledger.expenses().len(),
        ledger.savings_goals().len()
    );
    Ok(())
}
