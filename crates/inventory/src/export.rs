//! Plain-text restocking report export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use thiserror::Error;

use stockbook_core::{Clock, Key};

use crate::ledger::InventoryLedger;
use crate::purchasing::RestockRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write restocking report: {0}")]
    Io(#[from] std::io::Error),
}

impl<K: Key, S: Key, C: Clock> InventoryLedger<K, S, C> {
    /// Write the restock history to `path`, creating or truncating it.
    ///
    /// The file handle is released on every return path, including write errors.
    pub fn export_restocking_reports(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let result = File::create(path)
            .map_err(ExportError::from)
            .and_then(|file| self.write_restocking_report(&mut BufWriter::new(file)));

        match &result {
            Ok(()) => tracing::info!(
                path = %path.display(),
                records = self.restock_history.len(),
                "restocking report exported"
            ),
            Err(err) => tracing::warn!(
                path = %path.display(),
                error = %err,
                "restocking report export failed"
            ),
        }
        result
    }

    /// Write one line per restock record, in history order, to any sink.
    pub fn write_restocking_report<W: Write>(&self, out: &mut W) -> Result<(), ExportError> {
        for record in &self.restock_history {
            self.write_line(out, record)?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_line<W: Write>(&self, out: &mut W, record: &RestockRecord<K>) -> std::io::Result<()> {
        let format = self
            .config
            .export_date_format_for(record.date.timestamp_subsec_micros());
        let date = record.date.with_timezone(&Local).format(format);
        writeln!(
            out,
            "Item: {}, Quantity: {}, Supplier: {}, Date: {}",
            record.item_id, record.quantity, record.supplier, date
        )
    }
}
