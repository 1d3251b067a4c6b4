//! Survey file ingest: CSV sheets and JSON record arrays into candidate rows.

use anyhow::{anyhow, bail, Context, Result};
use careerlens_domain::{CandidateRow, CellValue};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read every row of a survey file, dispatching on the file extension.
pub fn read_rows(path: &Path) -> Result<Vec<CandidateRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let rows = match extension.as_str() {
        "csv" => {
            let file = File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file).with_context(|| format!("parsing {}", path.display()))?
        }
        "json" => {
            let file = File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_json(file).with_context(|| format!("parsing {}", path.display()))?
        }
        "xlsx" | "xls" => bail!(
            "{}: spreadsheet workbooks are not supported; export the sheet as CSV",
            path.display()
        ),
        other => bail!(
            "{}: unsupported file type '{}' (expected .csv or .json)",
            path.display(),
            other
        ),
    };

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read a CSV sheet with a header row.
///
/// Cells are typed with [`CellValue::infer`]. Repeated headers get `.1`, `.2`
/// suffixes and surplus cells get `Unnamed: <index>` headers, so every cell of
/// the sheet reaches the row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CandidateRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = dedupe_headers(reader.headers().context("reading header row")?.iter());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header is line 1
        let record = record.with_context(|| format!("reading line {}", index + 2))?;
        let mut row = CandidateRow::new();
        for (position, raw) in record.iter().enumerate() {
            let column = headers
                .get(position)
                .cloned()
                .unwrap_or_else(|| format!("Unnamed: {}", position));
            row.insert(column, CellValue::infer(raw));
        }
        for column in headers.iter().skip(record.len()) {
            row.insert(column.clone(), CellValue::Empty);
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Read a JSON array of flat objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<CandidateRow>> {
    let document: Value = serde_json::from_reader(reader).context("invalid JSON")?;
    let Value::Array(items) = document else {
        bail!("expected a JSON array of records");
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(CandidateRow::from(map)),
            _ => Err(anyhow!("record {} is not a JSON object", index)),
        })
        .collect()
}

fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.map(|name| {
        let name = name.trim();
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        candidate
    })
    .collect()
}
