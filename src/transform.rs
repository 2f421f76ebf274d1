// Per-table row transforms.
//
// Each function maps one flat-file record to the destination table's column
// order. Lookups come in by shared reference; the functions hold no state of
// their own, so a failed row cannot leave anything half-applied.

use std::collections::HashMap;

use csv::StringRecord;
use rusqlite::types::Value;

use crate::balance::BalanceStatus;
use crate::error::{LoadError, Result};
use crate::reader::{field, parse_f64, parse_i64};

/// nation id -> (nation name, region name), built before any dimension load.
pub type NationLookup = HashMap<i64, (String, String)>;
/// part-supplier row id -> (part id, supplier id).
pub type PartSuppLookup = HashMap<i64, (i64, i64)>;
/// order key -> customer id.
pub type OrderCustomerLookup = HashMap<i64, i64>;

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

/// customer.tbl row -> customers columns.
///
/// Replaces the numeric nation reference with the embedded
/// (nationname, regionname) pair and derives the balance status.
pub fn customer_row(record: &StringRecord, nations: &NationLookup) -> Result<Vec<Value>> {
    let nationkey = parse_i64(record, 3)?;
    let (nationname, regionname) =
        nations
            .get(&nationkey)
            .ok_or(LoadError::MissingReference {
                entity: "nation",
                key: nationkey,
            })?;
    let acctbal = parse_f64(record, 5)?;

    Ok(vec![
        Value::Integer(parse_i64(record, 0)?),
        text(field(record, 1)?),
        text(field(record, 2)?),
        text(field(record, 4)?),
        Value::Real(acctbal),
        text(BalanceStatus::of(acctbal).as_str()),
        text(field(record, 6)?),
        text(field(record, 7)?),
        text(nationname),
        text(regionname),
    ])
}

/// supplier.tbl row -> suppliers columns. Same denormalization as customers,
/// minus the balance status.
pub fn supplier_row(record: &StringRecord, nations: &NationLookup) -> Result<Vec<Value>> {
    let nationkey = parse_i64(record, 3)?;
    let (nationname, regionname) =
        nations
            .get(&nationkey)
            .ok_or(LoadError::MissingReference {
                entity: "nation",
                key: nationkey,
            })?;

    Ok(vec![
        Value::Integer(parse_i64(record, 0)?),
        text(field(record, 1)?),
        text(field(record, 2)?),
        text(field(record, 4)?),
        Value::Real(parse_f64(record, 5)?),
        text(field(record, 6)?),
        text(nationname),
        text(regionname),
    ])
}

/// part.tbl row -> parts columns. No references to resolve; the trailing
/// field is dropped.
pub fn part_row(record: &StringRecord) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Integer(parse_i64(record, 0)?),
        text(field(record, 1)?),
        text(field(record, 2)?),
        text(field(record, 3)?),
        text(field(record, 4)?),
        Value::Integer(parse_i64(record, 5)?),
        text(field(record, 6)?),
        Value::Real(parse_f64(record, 7)?),
        text(field(record, 8)?),
    ])
}

/// partsupp.tbl row -> partsupps columns. The embedded part and supplier ids
/// are not persisted here; they live in the part-supplier lookup consumed by
/// line items.
pub fn partsupp_row(record: &StringRecord) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Integer(parse_i64(record, 0)?),
        Value::Integer(parse_i64(record, 3)?),
        Value::Real(parse_f64(record, 4)?),
        text(field(record, 5)?),
    ])
}

/// orders.tbl row -> orders columns. The customer reference (field 1) is
/// dropped here; it is captured by the order-customer lookup instead.
pub fn order_row(record: &StringRecord) -> Result<Vec<Value>> {
    Ok(vec![
        Value::Integer(parse_i64(record, 0)?),
        text(field(record, 2)?),
        Value::Real(parse_f64(record, 3)?),
        text(field(record, 4)?),
        text(field(record, 5)?),
        text(field(record, 6)?),
        text(field(record, 7)?),
        text(field(record, 8)?),
    ])
}

/// lineitem.tbl row -> lineitems columns.
///
/// Resolves the part-supplier reference into explicit part and supplier ids
/// (missing entry is fatal), resolves the order reference into a customer id
/// (missing entry becomes NULL), and computes revenue as
/// `extendedprice * (1 - discount)`.
pub fn lineitem_row(
    record: &StringRecord,
    partsupps: &PartSuppLookup,
    order_customers: &OrderCustomerLookup,
) -> Result<Vec<Value>> {
    let orderkey = parse_i64(record, 1)?;
    let ps_id = parse_i64(record, 2)?;

    let (partkey, suppkey) = partsupps.get(&ps_id).ok_or(LoadError::MissingReference {
        entity: "partsupp",
        key: ps_id,
    })?;

    let custkey = match order_customers.get(&orderkey) {
        Some(custkey) => Value::Integer(*custkey),
        None => Value::Null,
    };

    let extendedprice = parse_f64(record, 5)?;
    let discount = parse_f64(record, 6)?;
    let revenue = extendedprice * (1.0 - discount);

    Ok(vec![
        Value::Integer(parse_i64(record, 0)?),
        Value::Integer(orderkey),
        Value::Integer(ps_id),
        custkey,
        Value::Integer(*partkey),
        Value::Integer(*suppkey),
        Value::Real(revenue),
        Value::Integer(parse_i64(record, 3)?),
        Value::Integer(parse_i64(record, 4)?),
        Value::Real(extendedprice),
        Value::Real(discount),
        Value::Real(parse_f64(record, 7)?),
        text(field(record, 8)?),
        text(field(record, 9)?),
        text(field(record, 10)?),
        text(field(record, 11)?),
        text(field(record, 12)?),
        text(field(record, 13)?),
        text(field(record, 14)?),
        text(field(record, 15)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nations() -> NationLookup {
        let mut map = NationLookup::new();
        map.insert(0, ("INDIA".to_string(), "ASIA".to_string()));
        map
    }

    #[test]
    fn test_customer_row_denormalizes_nation_and_region() {
        let record = StringRecord::from(vec![
            "7",
            "Acme",
            "Addr",
            "0",
            "555-1234",
            "-150.0",
            "AUTOMOBILE",
            "note",
        ]);

        let row = customer_row(&record, &nations()).unwrap();

        assert_eq!(row[0], Value::Integer(7));
        assert_eq!(row[1], Value::Text("Acme".to_string()));
        assert_eq!(row[3], Value::Text("555-1234".to_string()));
        assert_eq!(row[4], Value::Real(-150.0));
        assert_eq!(row[5], Value::Text("debit".to_string()));
        assert_eq!(row[6], Value::Text("AUTOMOBILE".to_string()));
        assert_eq!(row[8], Value::Text("INDIA".to_string()));
        assert_eq!(row[9], Value::Text("ASIA".to_string()));
    }

    #[test]
    fn test_customer_unknown_nation_is_fatal() {
        let record = StringRecord::from(vec![
            "7", "Acme", "Addr", "42", "555-1234", "-150.0", "AUTOMOBILE", "note",
        ]);

        let err = customer_row(&record, &nations()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingReference {
                entity: "nation",
                key: 42
            }
        ));
    }

    #[test]
    fn test_supplier_row_has_no_balance_status() {
        let record = StringRecord::from(vec![
            "3", "Supp", "Addr", "0", "555-0000", "12.5", "note",
        ]);

        let row = supplier_row(&record, &nations()).unwrap();

        assert_eq!(row.len(), 8);
        assert_eq!(row[0], Value::Integer(3));
        assert_eq!(row[4], Value::Real(12.5));
        assert_eq!(row[5], Value::Text("note".to_string()));
        assert_eq!(row[6], Value::Text("INDIA".to_string()));
        assert_eq!(row[7], Value::Text("ASIA".to_string()));
    }

    #[test]
    fn test_part_row_drops_trailing_field() {
        let record = StringRecord::from(vec![
            "1", "green part", "Mfgr#1", "Brand#1", "STEEL", "4", "BOX", "901.0", "note", "",
        ]);

        let row = part_row(&record).unwrap();

        assert_eq!(row.len(), 9);
        assert_eq!(row[5], Value::Integer(4));
        assert_eq!(row[7], Value::Real(901.0));
        assert_eq!(row[8], Value::Text("note".to_string()));
    }

    #[test]
    fn test_partsupp_row_keeps_only_persisted_columns() {
        let record = StringRecord::from(vec!["1", "42", "99", "10", "2.5", "note"]);

        let row = partsupp_row(&record).unwrap();

        assert_eq!(
            row,
            vec![
                Value::Integer(1),
                Value::Integer(10),
                Value::Real(2.5),
                Value::Text("note".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_row_drops_customer_reference() {
        let record = StringRecord::from(vec![
            "11", "4", "O", "100.0", "1996-01-02", "5-LOW", "Clerk#1", "0", "note",
        ]);

        let row = order_row(&record).unwrap();

        assert_eq!(row.len(), 8);
        assert_eq!(row[0], Value::Integer(11));
        assert_eq!(row[1], Value::Text("O".to_string()));
        assert_eq!(row[2], Value::Real(100.0));
        assert_eq!(row[3], Value::Text("1996-01-02".to_string()));
    }

    fn lineitem_record() -> StringRecord {
        StringRecord::from(vec![
            "1",
            "11",
            "1",
            "1",
            "17",
            "100.0",
            "0.1",
            "0.02",
            "N",
            "O",
            "1996-03-13",
            "1996-02-12",
            "1996-03-22",
            "DELIVER IN PERSON",
            "TRUCK",
            "note",
        ])
    }

    #[test]
    fn test_lineitem_resolves_partsupp_and_revenue() {
        let mut partsupps = PartSuppLookup::new();
        partsupps.insert(1, (42, 99));
        let mut order_customers = OrderCustomerLookup::new();
        order_customers.insert(11, 4);

        let row = lineitem_row(&lineitem_record(), &partsupps, &order_customers).unwrap();

        assert_eq!(row[3], Value::Integer(4));
        assert_eq!(row[4], Value::Integer(42));
        assert_eq!(row[5], Value::Integer(99));
        assert_eq!(row[6], Value::Real(90.0));
        assert_eq!(row[9], Value::Real(100.0));
        assert_eq!(row[10], Value::Real(0.1));
    }

    #[test]
    fn test_lineitem_unknown_order_becomes_null_customer() {
        let mut partsupps = PartSuppLookup::new();
        partsupps.insert(1, (42, 99));
        let order_customers = OrderCustomerLookup::new();

        let row = lineitem_row(&lineitem_record(), &partsupps, &order_customers).unwrap();

        assert_eq!(row[3], Value::Null);
    }

    #[test]
    fn test_lineitem_unknown_partsupp_is_fatal() {
        let partsupps = PartSuppLookup::new();
        let order_customers = OrderCustomerLookup::new();

        let err = lineitem_row(&lineitem_record(), &partsupps, &order_customers).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingReference {
                entity: "partsupp",
                key: 1
            }
        ));
    }
}
