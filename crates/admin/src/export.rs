//! CSV export of pre-order requests.
//!
//! Produces the bytes of a spreadsheet-ready file: a UTF-8 byte-order
//! mark (so common spreadsheet tools detect the encoding), a header row,
//! and one row per request with every cell quoted and embedded quotes
//! doubled. Triggering the actual download is the caller's concern.

use maktaba_core::Preorder;

/// UTF-8 byte-order mark.
const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const HEADERS: [&str; 7] = [
    "Name", "Phone", "Item", "Quantity", "Details", "Status", "Date",
];

/// Errors that can occur while building the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A row could not be written.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    /// The in-memory buffer could not be flushed.
    #[error("csv buffer error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize the given requests into CSV bytes.
///
/// Rows appear in the given order (the dashboard passes its filtered,
/// newest-first view). Embedded newlines in the details are flattened to
/// spaces so every record stays on one line.
///
/// # Errors
///
/// Returns [`ExportError`] if the in-memory writer fails, which in
/// practice means an allocation problem.
pub fn export_csv(records: &[Preorder]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;

    for record in records {
        let details = record
            .details
            .as_deref()
            .unwrap_or_default()
            .replace(['\n', '\r'], " ");

        writer.write_record([
            record.name.as_str(),
            record.phone.as_str(),
            record.item_name.as_str(),
            &record.quantity.to_string(),
            &details,
            record.status.display(),
            &record.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ])?;
    }

    let body = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;

    let mut out = Vec::with_capacity(BOM.len() + body.len());
    out.extend_from_slice(BOM);
    out.extend_from_slice(&body);
    Ok(out)
}
