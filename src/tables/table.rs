use anyhow::Context;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// A dense lookup table, built once from scratch and
/// handed off as raw little-endian bytes.
///
/// Entries are laid out by index, so a consumer reads
/// entry i at byte offset i * width with no framing.
pub trait Table: Sized {
    /// One slot of the table.
    type Entry: Copy + std::fmt::Display;
    /// Returns the name of the table. Used as the file stem on disk.
    fn name() -> &'static str;
    /// Number of slots, fixed by the encoding space.
    fn size() -> usize;
    /// Build from scratch.
    fn grow() -> Self;
    /// Slots in index order.
    fn entries(&self) -> &[Self::Entry];
    /// Serialize a single slot.
    fn encode<W: Write>(entry: Self::Entry, writer: &mut W) -> std::io::Result<()>;

    /// Serialize every slot in index order.
    fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in self.entries() {
            Self::encode(*entry, writer)?;
        }
        Ok(())
    }
    /// In-memory serialization.
    fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.write(&mut bytes).expect("write to vec");
        bytes
    }
    /// Path to file on disk.
    fn path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.bin", Self::name()))
    }
    /// Write to disk.
    fn save(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
        let path = Self::path(dir);
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create table file {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        self.write(writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("write table {}", Self::name()))?;
        log::info!("{:<32}{:<32}", format!("saving      {}", Self::name()), path.display());
        Ok(path)
    }
    /// How many slots hold each distinct value.
    fn census(&self) -> BTreeMap<String, usize> {
        self.entries()
            .iter()
            .map(|entry| entry.to_string())
            .fold(BTreeMap::new(), |mut census, entry| {
                *census.entry(entry).or_insert(0) += 1;
                census
            })
    }
    /// Log the census, one line per distinct value.
    fn report(&self) {
        log::info!("{:<32}{:<32}", "summarizing table", Self::name());
        for (entry, count) in self.census() {
            log::info!("{:<32}{:>8}", entry, count);
        }
    }
}
