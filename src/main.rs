use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dssload::{db, loader};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let db_path = PathBuf::from(args.next().unwrap_or_else(|| "test.db".to_string()));

    let mut conn = db::open(&db_path)?;
    let summary = loader::run(&mut conn, &data_dir)?;

    println!("Load complete ({})", db_path.display());
    println!("  customers: {}", summary.customers);
    println!("  suppliers: {}", summary.suppliers);
    println!("  parts:     {}", summary.parts);
    println!("  partsupps: {}", summary.partsupps);
    println!("  orders:    {}", summary.orders);
    println!("  lineitems: {}", summary.lineitems);

    Ok(())
}
