//! Emitter: one CSV row per film, display title plus its sorted awards.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::records::FilmMap;
use crate::titles;

#[derive(Serialize)]
struct SummaryRow {
    title: String,
    awards: String,
}

/// Write the per-film summary for each class of films in turn (features
/// first, then shorts). `blank_rows` leaves room at the top for
/// manually-added spreadsheet headers.
pub fn write_summary<W: Write>(
    out: W,
    films: &FilmMap,
    classes: &[Vec<&str>],
    blank_rows: usize,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    for _ in 0..blank_rows {
        writer.write_record(&[""; 2])?;
    }
    for class in classes {
        for key in class {
            let record = &films[*key];
            let mut labels: Vec<&str> = record.labels().iter().map(String::as_str).collect();
            labels.sort_unstable();
            writer.serialize(SummaryRow {
                title: titles::restore_title(key),
                awards: labels.join(", "),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
