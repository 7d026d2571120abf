#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    /// lowest suit, which wins ties between equal counts
    pub const MIN: Self = Suit::Club;

    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
    /// bit offset of this suit's 3-bit counter in a packed suit hash
    pub const fn shift(&self) -> u32 {
        *self as u32 * 3
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match Self::all().get(n as usize) {
            Some(suit) => *suit,
            None => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// one card of this suit, in packed counter space
impl From<Suit> for u16 {
    fn from(s: Suit) -> u16 {
        1 << s.shift()
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::from(u8::from(suit)));
        }
    }

    #[test]
    fn packed_counter_offsets() {
        assert_eq!(u16::from(Suit::Club), 0b_000_000_000_001);
        assert_eq!(u16::from(Suit::Diamond), 0b_000_000_001_000);
        assert_eq!(u16::from(Suit::Heart), 0b_000_001_000_000);
        assert_eq!(u16::from(Suit::Spade), 0b_001_000_000_000);
    }

    #[test]
    #[should_panic]
    fn invalid_label() {
        let _ = Suit::from(4u8);
    }
}
