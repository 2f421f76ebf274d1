// Orchestration of the full load, in fixed dependency order.

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::db;
use crate::error::{LoadError, Result};
use crate::import::import_table;
use crate::lookup::build_lookup;
use crate::reader::{field, parse_i64};
use crate::transform;

/// Field delimiter used by all input files.
pub const DELIMITER: u8 = b'|';

/// Rows inserted per destination table.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadSummary {
    pub customers: usize,
    pub suppliers: usize,
    pub parts: usize,
    pub partsupps: usize,
    pub orders: usize,
    pub lineitems: usize,
}

/// Run the entire load inside one transaction.
///
/// Stage order is fixed by data dependencies: nations need the region
/// lookup, customers and suppliers need the nation lookup, and line items
/// need the part-supplier and order-customer lookups. Any failure rolls the
/// transaction back, leaving the database exactly as it was.
pub fn run(conn: &mut Connection, data_dir: &Path) -> Result<LoadSummary> {
    let tx = conn.transaction()?;

    db::create_tables(&tx)?;

    let regions = build_lookup(&data_dir.join("region.tbl"), DELIMITER, |row| {
        Ok(field(row, 1)?.to_string())
    })?;
    debug!(entries = regions.len(), "region lookup built");

    let nations = build_lookup(&data_dir.join("nation.tbl"), DELIMITER, |row| {
        let name = field(row, 1)?.to_string();
        let regionkey = parse_i64(row, 2)?;
        let region = regions.get(&regionkey).ok_or(LoadError::MissingReference {
            entity: "region",
            key: regionkey,
        })?;
        Ok((name, region.clone()))
    })?;
    debug!(entries = nations.len(), "nation lookup built");

    let mut summary = LoadSummary::default();

    summary.customers = import_table(
        &tx,
        &data_dir.join("customer.tbl"),
        DELIMITER,
        "customers",
        |row| transform::customer_row(row, &nations),
    )?;
    info!(rows = summary.customers, "customers loaded");

    summary.suppliers = import_table(
        &tx,
        &data_dir.join("supplier.tbl"),
        DELIMITER,
        "suppliers",
        |row| transform::supplier_row(row, &nations),
    )?;
    info!(rows = summary.suppliers, "suppliers loaded");

    summary.parts = import_table(
        &tx,
        &data_dir.join("part.tbl"),
        DELIMITER,
        "parts",
        transform::part_row,
    )?;
    info!(rows = summary.parts, "parts loaded");

    // Line items need part-supplier and order-customer lookups; build each
    // one before importing its table so the transforms stay pure.
    let partsupps = build_lookup(&data_dir.join("partsupp.tbl"), DELIMITER, |row| {
        Ok((parse_i64(row, 1)?, parse_i64(row, 2)?))
    })?;
    summary.partsupps = import_table(
        &tx,
        &data_dir.join("partsupp.tbl"),
        DELIMITER,
        "partsupps",
        transform::partsupp_row,
    )?;
    info!(rows = summary.partsupps, "partsupps loaded");

    let order_customers = build_lookup(&data_dir.join("orders.tbl"), DELIMITER, |row| {
        parse_i64(row, 1)
    })?;
    summary.orders = import_table(
        &tx,
        &data_dir.join("orders.tbl"),
        DELIMITER,
        "orders",
        transform::order_row,
    )?;
    info!(rows = summary.orders, "orders loaded");

    summary.lineitems = import_table(
        &tx,
        &data_dir.join("lineitem.tbl"),
        DELIMITER,
        "lineitems",
        |row| transform::lineitem_row(row, &partsupps, &order_customers),
    )?;
    info!(rows = summary.lineitems, "lineitems loaded");

    tx.commit()?;

    Ok(summary)
}
