use super::sequences::SuitSequences;
use super::suits::SuitCounts;
use super::table::Table;
use crate::cards::suit::Suit;
use byteorder::WriteBytesExt;

/// Cards of one suit that make a flush.
const FLUSH_COUNT: u8 = 5;
/// Cards of one suit worth tracking toward a flush.
const DRAW_COUNT: u8 = 2;

/// What the suits of a hand say about flushes.
///
/// Serialized as an i8: zero for Rainbow, suit + 1 for Suited,
/// and count - 5 for Short, so the sign alone separates made
/// flushes from everything else.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Flush {
    /// no suit appears twice
    #[default]
    Rainbow,
    /// the best suit holds 2, 3, or 4 cards
    Short(u8),
    /// this suit holds 5 or more cards
    Suited(Suit),
}

impl From<SuitCounts> for Flush {
    fn from(counts: SuitCounts) -> Self {
        match counts.max() {
            (suit, n) if n >= FLUSH_COUNT => Flush::Suited(suit),
            (_, n) if n >= DRAW_COUNT => Flush::Short(n),
            _ => Flush::Rainbow,
        }
    }
}

/// i8 isomorphism
impl From<Flush> for i8 {
    fn from(flush: Flush) -> i8 {
        match flush {
            Flush::Rainbow => 0,
            Flush::Short(n) => n as i8 - FLUSH_COUNT as i8,
            Flush::Suited(suit) => u8::from(suit) as i8 + 1,
        }
    }
}
impl From<i8> for Flush {
    fn from(n: i8) -> Flush {
        match n {
            0 => Flush::Rainbow,
            1..=4 => Flush::Suited(Suit::from(n as u8 - 1)),
            -3..=-1 => Flush::Short((n + FLUSH_COUNT as i8) as u8),
            _ => panic!("Invalid flush i8: {}", n),
        }
    }
}

impl std::fmt::Display for Flush {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Flush::Rainbow => write!(f, "Rainbow  ({:>2})", i8::from(*self)),
            Flush::Short(n) => write!(f, "Short {}  ({:>2})", n, i8::from(*self)),
            Flush::Suited(s) => write!(f, "Suited {} ({:>2})", s, i8::from(*self)),
        }
    }
}

/// Flush classification for every packed SuitCounts hash.
///
/// Only hashes of 3 to 7 cards are ever written;
/// the rest stay Rainbow.
pub struct FlushTable(Vec<Flush>);

impl FlushTable {
    /// hashes past the end of the table never come from 3 to 7 cards
    pub fn lookup(&self, counts: SuitCounts) -> Flush {
        self.0
            .get(u16::from(counts) as usize)
            .copied()
            .unwrap_or_default()
    }
}

impl Table for FlushTable {
    type Entry = Flush;
    fn name() -> &'static str {
        "suits"
    }
    fn size() -> usize {
        crate::FLUSH_TABLE_SIZE
    }
    fn grow() -> Self {
        let mut table = vec![Flush::default(); Self::size()];
        let mut visits = 0usize;
        for sequence in SuitSequences::descending() {
            let counts = SuitCounts::from(sequence.as_slice());
            table[u16::from(counts) as usize] = Flush::from(counts);
            visits += 1;
        }
        log::debug!("{:<32}{:<32}", "enumerated suit sequences", visits);
        Self(table)
    }
    fn entries(&self) -> &[Flush] {
        &self.0
    }
    fn encode<W: std::io::Write>(entry: Flush, writer: &mut W) -> std::io::Result<()> {
        writer.write_i8(i8::from(entry))
    }
}
