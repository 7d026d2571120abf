/// Rank symbols, indexed by Rank.
const SYMBOLS: &str = "23456789TJQKA";

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    const ALL: [Self; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// distance between two ranks, counting the Ace high
    pub const fn gap(lo: Self, hi: Self) -> u8 {
        hi as u8 - lo as u8
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match Self::ALL.get(n as usize) {
            Some(rank) => *rank,
            None => panic!("Invalid rank u8: {}", n),
        }
    }
}

/// one bit per rank in a RankMask
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << r as u8
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match (s.len(), SYMBOLS.find(s)) {
            (1, Some(i)) => Rank::from(i as u8),
            _ => panic!("Invalid rank str: {}", s),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let i = *self as usize;
        write!(f, "{}", &SYMBOLS[i..i + 1])
    }
}
