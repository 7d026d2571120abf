use super::table::Table;
use byteorder::WriteBytesExt;
use crate::MAX_HAND_SIZE;
use crate::MIN_HAND_SIZE;

/// Most cards of one rank.
const MAX_MULTIPLICITY: u8 = 4;

/// The packed contribution of a rank seen n times.
///
/// A rank held once bumps the singleton counter, twice the pair counter,
/// and so on, so summing this over all thirteen ranks of a hand yields
/// the hand's RankCounts hash with no further bookkeeping.
pub const fn count_hash(n: u8) -> u16 {
    assert!(n <= MAX_MULTIPLICITY, "a rank occurs at most four times");
    match n {
        0 => 0,
        n => 1 << ((n as u16 - 1) * 3),
    }
}

/// How many ranks of a hand occur once, twice, three, and four times.
///
/// Packs into a u16 with a 3-bit counter per multiplicity, singletons
/// at bit 0, pairs at 3, triplets at 6, quadruplets at 9.
/// [2, 2, 7, 7, 7, K, A]
/// xxxx 000 001 001 010
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RankCounts([u8; MAX_MULTIPLICITY as usize]);

impl RankCounts {
    const fn width() -> u16 {
        0b111
    }
    pub fn singles(&self) -> u8 {
        self.0[0]
    }
    pub fn pairs(&self) -> u8 {
        self.0[1]
    }
    pub fn trips(&self) -> u8 {
        self.0[2]
    }
    pub fn quads(&self) -> u8 {
        self.0[3]
    }
    /// cards needed to realize these counts
    pub fn n_cards(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &n)| (i + 1) * n as usize)
            .sum()
    }
    /// whether some 3 to 7 card hand has these counts
    pub fn is_legal(&self) -> bool {
        (MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&self.n_cards())
    }
}

/// u16 isomorphism
/// unpacking reads every counter, legal hand or not
impl From<u16> for RankCounts {
    fn from(n: u16) -> Self {
        Self([0, 1, 2, 3].map(|i| ((n >> (i * 3)) & Self::width()) as u8))
    }
}
impl From<RankCounts> for u16 {
    fn from(counts: RankCounts) -> Self {
        counts
            .0
            .iter()
            .enumerate()
            .inspect(|(_, n)| assert!(**n as u16 <= RankCounts::width(), "rank counter overflow"))
            .map(|(i, &n)| (n as u16) << (i * 3))
            .sum()
    }
}

/// (singles, pairs, trips, quads)
impl From<(u8, u8, u8, u8)> for RankCounts {
    fn from((singles, pairs, trips, quads): (u8, u8, u8, u8)) -> Self {
        Self([singles, pairs, trips, quads])
    }
}

/// per-rank occurrence projection
/// indexed by Rank, each entry 0 through 4
impl From<[u8; 13]> for RankCounts {
    fn from(occurrences: [u8; 13]) -> Self {
        Self::from(occurrences.into_iter().map(count_hash).sum::<u16>())
    }
}

impl std::fmt::Display for RankCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}x1 {}x2 {}x3 {}x4",
            self.singles(),
            self.pairs(),
            self.trips(),
            self.quads()
        )
    }
}

/// The five count_hash values, indexed by occurrence count.
pub struct CountHash([u16; MAX_MULTIPLICITY as usize + 1]);

impl Table for CountHash {
    type Entry = u16;
    fn name() -> &'static str {
        "count_hash"
    }
    fn size() -> usize {
        crate::COUNT_HASH_SIZE
    }
    fn grow() -> Self {
        Self([0, 1, 2, 3, 4].map(count_hash))
    }
    fn entries(&self) -> &[u16] {
        &self.0
    }
    fn encode<W: std::io::Write>(entry: u16, writer: &mut W) -> std::io::Result<()> {
        writer.write_u16::<byteorder::LE>(entry)
    }
}
