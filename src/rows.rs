//! The strict intermediate format shared by the extractor, the prep
//! tokenizer and the converter: one category per line, tab-separated, with
//! each nominee field independently CSV-encoded so internal commas and
//! quotes survive the flat row.

use std::io::{Read, Write};

use anyhow::{anyhow, Context, Result};

/// Encode one nominee sub-record as a single in-memory CSV record
/// (no trailing newline).
pub fn encode_nominee(fields: &[&str]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(fields)?;
    writer.flush()?;
    let buf = writer
        .into_inner()
        .map_err(|e| anyhow!("finalizing nominee field: {}", e))?;
    let encoded = String::from_utf8(buf).context("nominee field was not UTF-8")?;
    Ok(encoded.trim_end_matches(['\r', '\n']).to_string())
}

/// Decode a nominee field back into its sub-fields. An empty field decodes
/// to no sub-fields.
pub fn decode_nominee(field: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(field.as_bytes());
    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(str::to_string).collect())
}

/// Write strict rows as tab-separated lines.
pub fn write_rows<W: Write>(out: W, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(out);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read strict rows from tab-separated input. Rows vary in width (one
/// field per nominee), hence the flexible reader.
pub fn read_rows<R: Read>(input: R) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .has_headers(false)
        .from_reader(input);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
