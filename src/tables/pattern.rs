use super::counts::RankCounts;
use super::table::Table;

/// The rank groups a hand contains, by priority:
/// quads over trips over pairs, with finer multiplicity
/// breaking the tie within each level.
///
/// Serialized as a (quads, trips, pairs) triple of u8s.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pattern {
    #[default]
    Nothing,
    OnePair,
    TwoPair,
    ThreePair,
    Trips,
    TripsPair,
    TripsTwoPair,
    TwoTrips,
    Quads,
    QuadsPair,
    QuadsTrips,
}

impl Pattern {
    fn find_quads(counts: RankCounts) -> Option<Self> {
        match (counts.quads(), counts.trips(), counts.pairs()) {
            (0, _, _) => None,
            (_, t, _) if t > 0 => Some(Pattern::QuadsTrips),
            (_, _, p) if p > 0 => Some(Pattern::QuadsPair),
            _ => Some(Pattern::Quads),
        }
    }
    fn find_trips(counts: RankCounts) -> Option<Self> {
        match (counts.trips(), counts.pairs()) {
            (0, _) => None,
            (2, _) => Some(Pattern::TwoTrips),
            (_, 2) => Some(Pattern::TripsTwoPair),
            (_, 1) => Some(Pattern::TripsPair),
            _ => Some(Pattern::Trips),
        }
    }
    fn find_pairs(counts: RankCounts) -> Option<Self> {
        match counts.pairs() {
            3 => Some(Pattern::ThreePair),
            2 => Some(Pattern::TwoPair),
            1 => Some(Pattern::OnePair),
            _ => None,
        }
    }
}

/// counts that no 3 to 7 card hand can produce have Nothing
impl From<RankCounts> for Pattern {
    fn from(counts: RankCounts) -> Self {
        if counts.is_legal() {
            None.or_else(|| Self::find_quads(counts))
                .or_else(|| Self::find_trips(counts))
                .or_else(|| Self::find_pairs(counts))
                .unwrap_or(Pattern::Nothing)
        } else {
            Pattern::Nothing
        }
    }
}

/// (quads, trips, pairs) injection
impl From<Pattern> for [u8; 3] {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::QuadsTrips => [1, 1, 0],
            Pattern::QuadsPair => [1, 0, 1],
            Pattern::Quads => [1, 0, 0],
            Pattern::TwoTrips => [0, 2, 0],
            Pattern::TripsTwoPair => [0, 1, 2],
            Pattern::TripsPair => [0, 1, 1],
            Pattern::Trips => [0, 1, 0],
            Pattern::ThreePair => [0, 0, 3],
            Pattern::TwoPair => [0, 0, 2],
            Pattern::OnePair => [0, 0, 1],
            Pattern::Nothing => [0, 0, 0],
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [q, t, p] = <[u8; 3]>::from(*self);
        write!(f, "{:<16}({}, {}, {})", format!("{:?}", self), q, t, p)
    }
}

/// Pattern for every packed RankCounts hash.
pub struct PatternTable(Vec<Pattern>);

impl PatternTable {
    /// hashes past the end of the table are never legal
    pub fn lookup(&self, counts: RankCounts) -> Pattern {
        self.0
            .get(u16::from(counts) as usize)
            .copied()
            .unwrap_or_default()
    }
}

impl Table for PatternTable {
    type Entry = Pattern;
    fn name() -> &'static str {
        "pairs"
    }
    fn size() -> usize {
        crate::PATTERN_TABLE_SIZE
    }
    fn grow() -> Self {
        let table = (0..Self::size())
            .map(|hash| RankCounts::from(hash as u16))
            .map(Pattern::from)
            .collect::<Vec<Pattern>>();
        log::debug!(
            "{:<32}{:<32}",
            "legal rank count hashes",
            (0..Self::size())
                .filter(|&hash| RankCounts::from(hash as u16).is_legal())
                .count()
        );
        Self(table)
    }
    fn entries(&self) -> &[Pattern] {
        &self.0
    }
    fn encode<W: std::io::Write>(entry: Pattern, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&<[u8; 3]>::from(entry))
    }
}
