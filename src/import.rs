// Table importer: flat file in, one bulk insert out.

use std::path::Path;

use csv::StringRecord;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use crate::error::{LoadError, Result};
use crate::reader::open_table;

/// Transform every row of a flat file and bulk-insert the results into
/// `table`. Returns the number of rows inserted.
///
/// Every transformed row must have the same column count as the first one;
/// a mismatch fails the whole import before anything reaches the database.
/// An empty source file issues no insert at all.
pub fn import_table<F>(
    conn: &Connection,
    path: &Path,
    delimiter: u8,
    table: &str,
    mut transform: F,
) -> Result<usize>
where
    F: FnMut(&StringRecord) -> Result<Vec<Value>>,
{
    let mut reader = open_table(path, delimiter)?;
    let mut rows: Vec<Vec<Value>> = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = transform(&record?)?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(LoadError::RowWidth {
                    table: table.to_string(),
                    row: index + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        rows.push(row);
    }

    let Some(first) = rows.first() else {
        return Ok(0);
    };

    let placeholders = vec!["?"; first.len()].join(", ");
    let sql = format!("INSERT INTO {} VALUES ({})", table, placeholders);
    let mut stmt = conn.prepare(&sql)?;

    for row in &rows {
        stmt.execute(params_from_iter(row.iter()))?;
    }

    Ok(rows.len())
}
