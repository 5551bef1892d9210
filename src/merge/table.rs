//! In-memory CSV tables: load with encoding fallback, concatenate, write.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::cli::types::{decode_with_fallback, Encoding};
use crate::core::{read_bytes, write_atomic};
use crate::{Result, TmlError};

/// A header row plus data rows. Every row has exactly `headers.len()` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A loaded table together with the encoding that decoded it.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub encoding: Encoding,
}

/// Load `path` as comma-delimited text with a header row.
///
/// `encodings` are tried in order; only a decoding failure moves on to the
/// next one. Rows shorter than the header are padded with empty fields,
/// longer rows are an error.
pub fn load_table(path: &Path, encodings: &[Encoding]) -> Result<LoadedTable> {
    if encodings.is_empty() {
        return Err(TmlError::NoEncodings);
    }

    let bytes = read_bytes(path)?;
    let (encoding, text) =
        decode_with_fallback(&bytes, encodings).ok_or_else(|| TmlError::Decode {
            path: path.to_path_buf(),
            tried: encodings
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    if encoding != encodings[0] {
        info!(path = %path.display(), %encoding, "decoded with fallback encoding");
    }

    let table = parse_csv(path, &text)?;
    debug!(
        path = %path.display(),
        %encoding,
        columns = table.headers.len(),
        rows = table.len(),
        "loaded"
    );

    Ok(LoadedTable { table, encoding })
}

fn parse_csv(path: &Path, text: &str) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if headers.is_empty() {
        return Err(TmlError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    rename_duplicate_headers(&mut headers);
    let width = headers.len();
    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            return Err(TmlError::MalformedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }

        let mut row: Vec<String> = record.iter().map(String::from).collect();
        row.resize(width, String::new());
        table.rows.push(row);
    }

    Ok(table)
}

/// Give repeated column names a numeric suffix: `X`, `X.1`, `X.2`.
///
/// A suffixed name never collides with another column already in `headers`.
pub fn rename_duplicate_headers(headers: &mut [String]) {
    let mut taken: HashSet<String> = headers.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());

    for header in headers.iter_mut() {
        if seen.insert(header.clone()) {
            continue;
        }
        let base = header.clone();
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{}.{}", base, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(renamed.clone());
        seen.insert(renamed.clone());
        *header = renamed;
    }
}

/// Concatenate tables row-wise, keeping table order and row order.
///
/// The result's columns are the union of all headers in first-seen order;
/// a row gets an empty field for any column its table lacks. Repeated names
/// within one header are renamed first so no field is overwritten.
pub fn concat(tables: Vec<Table>) -> Table {
    let mut iter = tables.into_iter();
    let Some(mut merged) = iter.next() else {
        return Table::default();
    };
    rename_duplicate_headers(&mut merged.headers);
    let mut columns = ColumnIndex::from_headers(&merged.headers);

    for mut table in iter {
        rename_duplicate_headers(&mut table.headers);
        if table.headers == merged.headers {
            merged.rows.extend(table.rows);
            continue;
        }

        let before = merged.headers.len();
        let positions: Vec<usize> = table
            .headers
            .iter()
            .map(|h| columns.position_or_insert(h, &mut merged.headers))
            .collect();

        if merged.headers.len() > before {
            let width = merged.headers.len();
            for row in &mut merged.rows {
                row.resize(width, String::new());
            }
        }

        let width = merged.headers.len();
        for row in table.rows {
            let mut out = vec![String::new(); width];
            for (field, &pos) in row.into_iter().zip(&positions) {
                out[pos] = field;
            }
            merged.rows.push(out);
        }
    }

    merged
}

/// Serialize `table` as UTF-8 CSV with a header row, replacing `path` atomically.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TmlError::Io(e.into_error()))?;
    write_atomic(path, &bytes)
}

/// Column name to position in the merged header.
struct ColumnIndex(HashMap<String, usize>);

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Self {
        let mut map = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            map.entry(h.clone()).or_insert(i);
        }
        Self(map)
    }

    fn position_or_insert(&mut self, name: &str, headers: &mut Vec<String>) -> usize {
        if let Some(&pos) = self.0.get(name) {
            return pos;
        }
        headers.push(name.to_string());
        let pos = headers.len() - 1;
        self.0.insert(name.to_string(), pos);
        pos
    }
}
