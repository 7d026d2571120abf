use super::counts::CountHash;
use super::flush::FlushTable;
use super::pattern::PatternTable;
use super::straight::StraightTable;
use super::table::Table;
use std::path::Path;
use std::path::PathBuf;

/// Every table a hand classifier needs.
///
/// The generators share nothing, so they grow concurrently.
pub struct Tables {
    pub suits: FlushTable,
    pub pairs: PatternTable,
    pub count_hash: CountHash,
    pub straights: StraightTable,
}

impl Tables {
    pub fn grow() -> Self {
        log::info!(
            "{:<32}{:<32}",
            "growing     tables",
            "suits pairs straights"
        );
        let (suits, (pairs, straights)) = rayon::join(
            || grown::<FlushTable>(),
            || rayon::join(|| grown::<PatternTable>(), || grown::<StraightTable>()),
        );
        Self {
            suits,
            pairs,
            count_hash: grown::<CountHash>(),
            straights,
        }
    }
    pub fn save(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        Ok(vec![
            self.suits.save(dir)?,
            self.pairs.save(dir)?,
            self.count_hash.save(dir)?,
            self.straights.save(dir)?,
        ])
    }
    pub fn report(&self) {
        self.suits.report();
        self.pairs.report();
        self.count_hash.report();
        self.straights.report();
    }
}

/// grow a single table, logging how long it took
pub fn grown<T: Table>() -> T {
    let start = std::time::Instant::now();
    let table = T::grow();
    log::info!(
        "{:<32}{:<32}",
        format!("grew        {}", T::name()),
        format!("{} entries in {:?}", table.entries().len(), start.elapsed())
    );
    assert_eq!(table.entries().len(), T::size(), "{} table size", T::name());
    table
}
