pub mod args;
pub use args::*;

use crate::tables::*;
use std::path::Path;

/// grow, summarize, and save whatever the arguments ask for
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.only {
        None => {
            let tables = Tables::grow();
            if args.summary {
                tables.report();
            }
            if !args.dry_run {
                tables.save(&args.out)?;
            }
        }
        Some(Only::Suits) => emit(grown::<FlushTable>(), &args)?,
        Some(Only::Straights) => emit(grown::<StraightTable>(), &args)?,
        Some(Only::Pairs) => {
            emit(grown::<PatternTable>(), &args)?;
            emit(grown::<CountHash>(), &args)?;
        }
    }
    log::info!("{:<32}{:<32}", "finished", dir(&args.out, args.dry_run));
    Ok(())
}

fn emit<T: Table>(table: T, args: &Args) -> anyhow::Result<()> {
    if args.summary {
        table.report();
    }
    if !args.dry_run {
        table.save(&args.out)?;
    }
    Ok(())
}

fn dir(out: &Path, dry_run: bool) -> String {
    if dry_run {
        String::from("(dry run)")
    } else {
        out.display().to_string()
    }
}
