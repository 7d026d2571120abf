use super::rank::Rank;

/// RankMask represents the set of distinct Ranks present among some cards,
/// one bit per Rank. Suits and multiplicities are forgotten, so
/// [2c, 2d, 5h, As] and [2s, 5c, Ad] share the same mask.
///
/// Bits above the Ace are ignored, which lets every u16 index
/// into a table keyed by RankMask without a range check.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankMask(u16);

impl RankMask {
    /// one bit for each of the 13 ranks
    const BITS: u16 = 0b_1_1111_1111_1111;

    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn take_min(&self) -> Option<Rank> {
        if self.size() == 0 {
            None
        } else {
            Some(Rank::from(self.0.trailing_zeros() as u8))
        }
    }
    pub fn remove(&mut self, rank: Rank) {
        self.0 &= !u16::from(rank);
    }
}

/// we can empty a mask from low to high
/// by removing the lowest rank until the mask is empty
impl Iterator for RankMask {
    type Item = Rank;
    fn next(&mut self) -> Option<Self::Item> {
        let rank = self.take_min()?;
        self.remove(rank);
        Some(rank)
    }
}

/// u16 isomorphism (up to the ignored high bits)
/// [2, 5, T, A]
/// xxx 1000100001001
impl From<u16> for RankMask {
    fn from(n: u16) -> Self {
        Self(n & Self::BITS)
    }
}
impl From<RankMask> for u16 {
    fn from(m: RankMask) -> Self {
        m.0
    }
}

/// Vec<Rank> isomorphism (up to Vec permutation and duplicates,
/// this always comes out sorted ascending)
impl From<RankMask> for Vec<Rank> {
    fn from(m: RankMask) -> Self {
        m.collect()
    }
}
impl From<Vec<Rank>> for RankMask {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(
            ranks
                .into_iter()
                .map(|r| u16::from(r))
                .fold(0u16, |a, b| a | b),
        )
    }
}

/// str isomorphism
/// this follows from Vec<Rank> isomorphism
impl From<&str> for RankMask {
    fn from(s: &str) -> Self {
        Self::from(s.split_whitespace().map(Rank::from).collect::<Vec<Rank>>())
    }
}

impl crate::Arbitrary for RankMask {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random::<u16>())
    }
}

impl std::fmt::Display for RankMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in *self {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
