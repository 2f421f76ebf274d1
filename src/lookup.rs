// Lookup builder: one pass over a flat file, keyed by the leading integer.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;

use crate::error::Result;
use crate::reader::{open_table, parse_i64};

/// Build an in-memory map from each row's leading integer key to the value
/// produced by `derive`.
///
/// The first field of every row must parse as an integer. Duplicate keys are
/// not rejected: the later row overwrites the earlier entry.
pub fn build_lookup<V, F>(path: &Path, delimiter: u8, mut derive: F) -> Result<HashMap<i64, V>>
where
    F: FnMut(&StringRecord) -> Result<V>,
{
    let mut reader = open_table(path, delimiter)?;
    let mut map = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let key = parse_i64(&record, 0)?;
        map.insert(key, derive(&record)?);
    }

    Ok(map)
}
