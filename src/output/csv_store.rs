//! CSV storage for the enriched ticket dataset.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::types::{parse_embedding, EnrichedTicket, TicketRecord, DATASET_HEADER};

/// Render the header and all records as CSV bytes.
///
/// Fields are quoted only when needed and records end with `\r\n`.
pub fn encode_dataset(records: &[EnrichedTicket]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(DATASET_HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))
}

/// Write the dataset to `path`, creating its directory and replacing any
/// previous file. Returns the number of records written.
pub fn write_dataset(path: &Path, records: &[EnrichedTicket]) -> Result<usize> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let bytes = encode_dataset(records)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write dataset {}", path.display()))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Dataset written");
    Ok(records.len())
}

/// Read a dataset previously written by [`write_dataset`].
pub fn read_dataset(path: &Path) -> Result<Vec<EnrichedTicket>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;

    let header = reader.headers()?.clone();
    if header.iter().ne(DATASET_HEADER.iter().copied()) {
        bail!(
            "Unexpected dataset header in {}: {:?}",
            path.display(),
            header.iter().collect::<Vec<_>>()
        );
    }

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read row {}", line + 1))?;
        let field = |i: usize| row.get(i).unwrap_or_default();

        let ticket = TicketRecord::new(field(0), field(1), field(2), field(3), field(4));
        let embedding = parse_embedding(field(5))
            .with_context(|| format!("Row {} ({})", line + 1, ticket.ticket_id))?;
        records.push(ticket.enrich(embedding));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticket(id: &str, request: &str) -> TicketRecord {
        TicketRecord::new(id, "DEV-1", request, "Core Concepts", "Restart it.")
    }

    #[test]
    fn test_encode_header_only() {
        let bytes = encode_dataset(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "ticket_id,customer_id,request,category,suggested_solution,request_embedding\r\n"
        );
    }

    #[test]
    fn test_encode_quotes_when_needed() {
        let records = vec![ticket("ADK-1", "Why does \"run\" fail, sometimes?").enrich(vec![1.0, 2.0])];
        let text = String::from_utf8(encode_dataset(&records).unwrap()).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "ADK-1,DEV-1,\"Why does \"\"run\"\" fail, sometimes?\",Core Concepts,Restart it.,\"[1.0, 2.0]\""
        );
    }

    #[test]
    fn test_write_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("resolved_tickets.csv");

        let first = vec![ticket("ADK-1", "a").enrich(vec![1.0]), ticket("ADK-2", "b").enrich(vec![2.0])];
        assert_eq!(write_dataset(&path, &first).unwrap(), 2);

        let second = vec![ticket("ADK-3", "c").enrich(vec![3.0])];
        assert_eq!(write_dataset(&path, &second).unwrap(), 1);

        let read = read_dataset(&path).unwrap();
        assert_eq!(read, second);
    }

    #[test]
    fn test_read_back_multiline_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.csv");
        let records = vec![
            ticket("ADK-1", "line one\nline two").enrich(vec![0.25, -0.5]),
            ticket("ADK-2", "plain").enrich(vec![0.0, 0.0]),
        ];

        write_dataset(&path, &records).unwrap();
        let read = read_dataset(&path).unwrap();

        assert_eq!(read, records);
        assert!(read[1].is_sentinel());
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "id,text\r\n1,hello\r\n").unwrap();

        let err = read_dataset(&path).unwrap_err();
        assert!(err.to_string().contains("Unexpected dataset header"));
    }

    #[test]
    fn test_read_rejects_bad_embedding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(
            &path,
            "ticket_id,customer_id,request,category,suggested_solution,request_embedding\r\n\
             ADK-1,DEV-1,hi,cat,sol,not-a-vector\r\n",
        )
        .unwrap();

        assert!(read_dataset(&path).is_err());
    }
}
