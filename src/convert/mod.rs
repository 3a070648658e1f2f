pub mod emit;
pub mod partition;
pub mod records;

use std::io::{Read, Write};

use anyhow::Result;

use crate::rows;

/// Full canonicalization pipeline: strict tab-separated input in, per-film
/// summary CSV out. Everything is read and grouped before the first row is
/// written, because the ordering needs every film's final award count.
pub fn run<R: Read, W: Write>(input: R, out: W, blank_rows: usize) -> Result<()> {
    let parsed = rows::read_rows(input)?;
    convert_rows(&parsed, out, blank_rows)
}

/// Same pipeline starting from already-parsed strict rows (used by the
/// one-shot extract+convert path).
pub fn convert_rows<W: Write>(
    input_rows: &[Vec<String>],
    out: W,
    blank_rows: usize,
) -> Result<()> {
    let films = records::accumulate(input_rows)?;
    let (mut features, mut shorts) = partition::partition(&films);
    partition::order_films(&mut features, &films);
    partition::order_films(&mut shorts, &films);
    emit::write_summary(out, &films, &[features, shorts], blank_rows)
}
