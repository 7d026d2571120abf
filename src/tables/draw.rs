/// How close a set of ranks comes to five in a row.
///
/// Each variant serializes to the single printable byte
/// that consumers of the straight table compare against.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Draw {
    #[default]
    None,
    Straight,
    MissingOneMiddle,
    MissingTwoMiddle,
    MissingHighOrLow,
    MissingTwoHighOrLow,
    MissingTwoCards,
}

impl Draw {
    pub const fn all() -> [Self; 7] {
        [
            Draw::None,
            Draw::Straight,
            Draw::MissingOneMiddle,
            Draw::MissingTwoMiddle,
            Draw::MissingHighOrLow,
            Draw::MissingTwoHighOrLow,
            Draw::MissingTwoCards,
        ]
    }
}

/// u8 isomorphism
impl From<Draw> for u8 {
    fn from(draw: Draw) -> u8 {
        match draw {
            Draw::None => b'x',
            Draw::Straight => b'S',
            Draw::MissingOneMiddle => b'm',
            Draw::MissingTwoMiddle => b'M',
            Draw::MissingHighOrLow => b'b',
            Draw::MissingTwoHighOrLow => b'B',
            Draw::MissingTwoCards => b'A',
        }
    }
}
impl TryFrom<u8> for Draw {
    type Error = anyhow::Error;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Draw::all()
            .into_iter()
            .find(|draw| u8::from(*draw) == byte)
            .ok_or_else(|| anyhow::anyhow!("invalid draw byte: {:?}", byte as char))
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<20}'{}'", format!("{:?}", self), u8::from(*self) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for draw in Draw::all() {
            assert_eq!(draw, Draw::try_from(u8::from(draw)).unwrap());
        }
    }

    #[test]
    fn distinct_bytes() {
        let bytes = Draw::all().map(u8::from);
        for (i, a) in bytes.iter().enumerate() {
            assert!(bytes[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn printable_codes() {
        assert_eq!(u8::from(Draw::None), b'x');
        assert_eq!(u8::from(Draw::Straight), b'S');
        assert_eq!(u8::from(Draw::MissingTwoCards), b'A');
    }

    #[test]
    fn rejects_unknown_bytes() {
        assert!(Draw::try_from(b'z').is_err());
        assert!(Draw::try_from(0u8).is_err());
    }
}
