use crate::cards::suit::Suit;

/// Per-suit card counts, the suit half of a hand with the ranks erased.
///
/// Packs into a u16 with one 3-bit counter per suit at bit offset suit * 3,
/// so adding a card is adding u16::from(suit) to the hash. Counters never
/// carry because a hand holds at most seven cards.
/// [c, c, h, s, s, s]
/// xxxx 011 001 000 010
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct SuitCounts([u8; 4]);

impl SuitCounts {
    const fn width() -> u16 {
        0b111
    }
    pub fn count(&self, suit: Suit) -> u8 {
        self.0[suit as usize]
    }
    pub fn size(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }
    pub fn add(&mut self, suit: Suit) {
        assert!(self.count(suit) < Self::width() as u8, "suit counter overflow");
        self.0[suit as usize] += 1;
    }
    /// the most populous suit, ties going to the lowest suit
    pub fn max(&self) -> (Suit, u8) {
        Suit::all()
            .into_iter()
            .map(|suit| (suit, self.count(suit)))
            .fold((Suit::MIN, 0), |best, next| if next.1 > best.1 { next } else { best })
    }
}

/// u16 isomorphism
/// unpacking reads every counter, legal hand size or not
impl From<u16> for SuitCounts {
    fn from(n: u16) -> Self {
        Self(Suit::all().map(|suit| ((n >> suit.shift()) & Self::width()) as u8))
    }
}
impl From<SuitCounts> for u16 {
    fn from(counts: SuitCounts) -> Self {
        Suit::all()
            .into_iter()
            .map(|suit| (suit, counts.count(suit) as u16))
            .inspect(|(_, n)| assert!(*n <= SuitCounts::width(), "suit counter overflow"))
            .map(|(suit, n)| n << suit.shift())
            .sum()
    }
}

/// [Suit] projection
/// order is forgotten, repeats accumulate
impl From<&[Suit]> for SuitCounts {
    fn from(suits: &[Suit]) -> Self {
        suits.iter().fold(Self::default(), |mut counts, &suit| {
            counts.add(suit);
            counts
        })
    }
}
impl From<[u8; 4]> for SuitCounts {
    fn from(counts: [u8; 4]) -> Self {
        Self(counts)
    }
}

impl std::fmt::Display for SuitCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all() {
            write!(f, "{}{}", self.count(suit), suit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_matches_summed_card_offsets() {
        let suits = [Suit::Club, Suit::Club, Suit::Heart, Suit::Spade, Suit::Spade, Suit::Spade];
        let summed = suits.iter().map(|&s| u16::from(s)).sum::<u16>();
        assert_eq!(u16::from(SuitCounts::from(&suits[..])), summed);
        assert_eq!(summed, 0b_011_001_000_010);
    }

    #[test]
    fn bijective_u16() {
        for hash in 0..0x1000u16 {
            assert_eq!(hash, u16::from(SuitCounts::from(hash)));
        }
    }

    #[test]
    fn seven_spades_is_largest_hand() {
        let counts = SuitCounts::from([0, 0, 0, 7]);
        assert_eq!(u16::from(counts) as usize, crate::FLUSH_TABLE_SIZE - 1);
        assert_eq!(counts.size(), 7);
    }

    #[test]
    fn max_prefers_lowest_suit_on_ties() {
        assert_eq!(SuitCounts::from([1, 3, 3, 0]).max(), (Suit::Diamond, 3));
        assert_eq!(SuitCounts::from([2, 2, 2, 1]).max(), (Suit::Club, 2));
        assert_eq!(SuitCounts::from([0, 0, 0, 0]).max(), (Suit::Club, 0));
    }

    #[test]
    #[should_panic]
    fn counter_overflow() {
        let mut counts = SuitCounts::from([7, 0, 0, 0]);
        counts.add(Suit::Club);
    }
}
