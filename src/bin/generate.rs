//! Table Generator Binary
//!
//! Grows the flush, pattern, count_hash, and straight tables
//! and writes each as raw little-endian bytes.
//!
//! Options: --out <DIR>, --only <suits|pairs|straights>, --summary, --dry-run

use clap::Parser;
use rbp_tables::cli::Args;

fn main() -> anyhow::Result<()> {
    rbp_tables::log();
    rbp_tables::cli::run(Args::parse())
}
