// Flat-file reader: pipe-delimited rows, no header, no interpretation.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{LoadError, Result};

/// Open a delimiter-separated flat file as a lazy row sequence.
///
/// Fields come back exactly as written: no trimming, no type coercion.
/// Readers are flexible because dbgen-style files end every line with a
/// trailing delimiter, which shows up as one extra empty field.
pub fn open_table(path: &Path, delimiter: u8) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(file))
}

/// Positional field access with a descriptive error on out-of-range.
pub fn field(record: &StringRecord, index: usize) -> Result<&str> {
    record
        .get(index)
        .ok_or(LoadError::MissingField { field: index })
}

pub fn parse_i64(record: &StringRecord, index: usize) -> Result<i64> {
    let raw = field(record, index)?;
    raw.parse().map_err(|_| LoadError::Parse {
        field: index,
        value: raw.to_string(),
    })
}

pub fn parse_f64(record: &StringRecord, index: usize) -> Result<f64> {
    let raw = field(record, index)?;
    raw.parse().map_err(|_| LoadError::Parse {
        field: index,
        value: raw.to_string(),
    })
}
