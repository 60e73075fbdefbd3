//! Delimited-file I/O
//!
//! Reads and writes entity tables as comma-separated text with a mandatory
//! header row. Columns are located by header name, so extra or reordered
//! columns are tolerated and short rows read as empty cells.

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, warn};

use crate::config::SchemaPolicy;
use crate::error::{GradeError, GradeResult};

/// A record type that maps to one row of a delimited file
pub trait TabularRecord: Sized {
    /// Entity name used in errors and logs
    const ENTITY: &'static str;

    /// Column names, in the order they are written
    const HEADERS: &'static [&'static str];

    /// Build a record from a row; must never fail on malformed cells
    fn from_row(row: &Row<'_>) -> Self;

    /// Cell values in `HEADERS` order
    fn to_row(&self) -> Vec<String>;

    /// The unique identifier field
    fn identifier(&self) -> &str;
}

/// One data row, addressable by column name
pub struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a HashMap<String, usize>,
}

impl<'a> Row<'a> {
    /// Cell value for `column`, or "" if the column or cell is absent
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|&index| self.record.get(index))
            .unwrap_or("")
    }
}

/// Outcome of a schema check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Header row already carries every expected column
    Valid,
    /// File didn't exist and was created header-only
    Created,
    /// File was rewritten header-only; `discarded_rows` rows were dropped
    Repaired { discarded_rows: usize },
}

/// Make sure `path` exists and its header row carries every expected column.
///
/// A missing file is created with just the header. An existing file whose
/// header lacks a column is either rewritten header-only (discarding its
/// rows) or rejected, depending on `policy`.
pub fn ensure_schema(
    path: &Path,
    headers: &[&str],
    policy: SchemaPolicy,
) -> GradeResult<SchemaStatus> {
    if !path.exists() {
        write_header_only(path, headers)?;
        debug!(file = %path.display(), "Created data file");
        return Ok(SchemaStatus::Created);
    }

    let missing = missing_headers(path, headers);
    if missing.is_empty() {
        return Ok(SchemaStatus::Valid);
    }

    match policy {
        SchemaPolicy::Strict => Err(GradeError::Schema {
            file: path.display().to_string(),
            missing,
        }),
        SchemaPolicy::Repair => {
            let discarded_rows = count_data_rows(path);
            warn!(
                file = %path.display(),
                ?missing,
                discarded_rows,
                "Header mismatch, rewriting file with expected header"
            );
            write_header_only(path, headers)?;
            Ok(SchemaStatus::Repaired { discarded_rows })
        }
    }
}

/// Expected columns absent from the file's header row.
///
/// An unreadable or empty file is missing every column.
fn missing_headers(path: &Path, headers: &[&str]) -> Vec<String> {
    let found: Vec<String> = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .and_then(|mut reader| reader.headers().cloned())
        .map(|record| record.iter().map(str::to_string).collect())
        .unwrap_or_default();

    headers
        .iter()
        .filter(|expected| !found.iter().any(|h| h == *expected))
        .map(|expected| expected.to_string())
        .collect()
}

fn count_data_rows(path: &Path) -> usize {
    ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map(|mut reader| reader.records().filter(Result::is_ok).count())
        .unwrap_or(0)
}

fn write_header_only(path: &Path, headers: &[&str]) -> GradeResult<()> {
    write_rows(path, headers, std::iter::empty::<Vec<String>>())
}

/// Read every data row of `path` into records
pub fn read_records<T: TabularRecord>(path: &Path) -> GradeResult<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| GradeError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            GradeError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        records.push(T::from_row(&Row {
            record: &record,
            columns: &columns,
        }));
    }

    debug!(
        file = %path.display(),
        entity = T::ENTITY,
        count = records.len(),
        "Loaded records"
    );
    Ok(records)
}

/// Rewrite `path` with the header row followed by one row per record
pub fn write_records<T: TabularRecord>(path: &Path, records: &[T]) -> GradeResult<()> {
    write_rows(path, T::HEADERS, records.iter().map(TabularRecord::to_row))?;
    debug!(
        file = %path.display(),
        entity = T::ENTITY,
        count = records.len(),
        "Saved records"
    );
    Ok(())
}

/// Write to a sibling temp file, then rename over `path`
fn write_rows<I>(path: &Path, headers: &[&str], rows: I) -> GradeResult<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GradeError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| GradeError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    writer
        .flush()
        .map_err(|e| GradeError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| GradeError::Storage(format!("Failed to flush data: {}", e.error())))?;

    file.sync_all()
        .map_err(|e| GradeError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GradeError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
