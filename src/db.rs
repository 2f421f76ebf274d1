// Destination schema. Regions and nations are not persisted; they only
// exist as in-memory lookups during the load.

use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub fn open(path: &Path) -> Result<Connection> {
    Ok(Connection::open(path)?)
}

/// Create the six destination tables. Runs inside the load transaction,
/// so a failed load leaves no schema behind either.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE customers (
            custkey INTEGER PRIMARY KEY,
            name TEXT,
            address TEXT,
            phone TEXT,
            acctbal REAL,
            balancestatus TEXT,
            mktsegment TEXT,
            comment TEXT,
            nationname TEXT,
            regionname TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE suppliers (
            suppkey INTEGER PRIMARY KEY,
            name TEXT,
            address TEXT,
            phone TEXT,
            acctbal REAL,
            comment TEXT,
            nationname TEXT,
            regionname TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE parts (
            partkey INTEGER PRIMARY KEY,
            name TEXT,
            mfgr TEXT,
            brand TEXT,
            type TEXT,
            size INTEGER,
            container TEXT,
            retailprice REAL,
            comment TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE partsupps (
            id INTEGER PRIMARY KEY,
            availqty INTEGER,
            supplycost REAL,
            comment TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE orders (
            orderkey INTEGER PRIMARY KEY,
            orderstatus TEXT,
            totalprice REAL,
            orderdate TEXT,
            orderpriority TEXT,
            clerk TEXT,
            shippriority TEXT,
            comment TEXT
        )",
        [],
    )?;

    // custkey is nullable: a line item whose order key has no entry in the
    // order lookup is kept, with NULL standing in for the missing customer.
    conn.execute(
        "CREATE TABLE lineitems (
            id INTEGER PRIMARY KEY,
            orderkey INTEGER,
            ps_id INTEGER,
            custkey INTEGER,
            partkey INTEGER,
            suppkey INTEGER,
            revenue REAL,
            linenumber INTEGER,
            quantity INTEGER,
            extendedprice REAL,
            discount REAL,
            tax REAL,
            returnflag TEXT,
            linestatus TEXT,
            shipdate TEXT,
            commitdate TEXT,
            receiptdate TEXT,
            shipinstruct TEXT,
            shipmode TEXT,
            comment TEXT,
            FOREIGN KEY(orderkey) REFERENCES orders(orderkey),
            FOREIGN KEY(ps_id) REFERENCES partsupps(id),
            FOREIGN KEY(custkey) REFERENCES customers(custkey),
            FOREIGN KEY(partkey) REFERENCES parts(partkey),
            FOREIGN KEY(suppkey) REFERENCES suppliers(suppkey)
        )",
        [],
    )?;

    Ok(())
}
