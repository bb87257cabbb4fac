use std::fs;
use std::path::Path;

use crate::app::domain::{ColumnView, Contract, ContractField, FieldValue, Record};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::format::flag_token;

/// Default file name offered in the save dialog
pub const DEFAULT_EXPORT_FILE_NAME: &str = "contracts.csv";

fn csv_value(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => format!("\"{}\"", text.replace('"', "\"\"")),
        FieldValue::Flag(flag) => flag_token(flag).to_string(),
        other => other.to_plain_string(),
    }
}

/// CSV text for `contracts` restricted to `columns`.
///
/// Header row uses the column labels as-is. Text cells are quoted with
/// inner quotes doubled, flags become `Так`/`Ні`, numbers are written in
/// plain form. Lines are joined with `\n`; there is no trailing newline.
pub fn export_csv(contracts: &[&Contract], columns: &[ColumnView<ContractField>]) -> String {
    let header = columns
        .iter()
        .map(|column| column.label.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let rows = contracts
        .iter()
        .map(|contract| {
            columns
                .iter()
                .map(|column| csv_value(contract.value(column.field)))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, rows)
}

/// Write exported CSV text to `path`.
pub fn write_export(path: &Path, csv: &str) -> Result<()> {
    fs::write(path, csv)
        .map_err(|e| AppError::Export(format!("cannot write {}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), bytes = csv.len(), "Contracts exported");
    Ok(())
}
