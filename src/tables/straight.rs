use super::draw::Draw;
use super::table::Table;
use crate::cards::rank::Rank;
use crate::cards::ranks::RankMask;
use byteorder::WriteBytesExt;

/// Ranks in a straight.
const STRAIGHT_LENGTH: usize = 5;
/// Fewest ranks worth calling a draw.
const MIN_WINDOW: usize = 3;

/// A lazy evaluator for a set of ranks' straight potential.
///
/// Ranks are held sorted ascending. We slide windows of 5, then 4,
/// then 3 consecutive ranks down from the top, and keep the first
/// window that says anything: larger windows are closer to a made
/// straight, and higher windows use higher cards.
///
/// The Ace is stored high. It plays low only in the checks that
/// look for a wheel, where a top-of-window Ace sits above a Four or Five.
pub struct Evaluator(Vec<Rank>);

impl From<RankMask> for Evaluator {
    fn from(mask: RankMask) -> Self {
        Self(Vec::<Rank>::from(mask))
    }
}

impl Evaluator {
    pub fn find_draw(&self) -> Draw {
        if self.0.len() > crate::MAX_HAND_SIZE {
            return Draw::None;
        }
        None.or_else(|| self.find_in_windows(STRAIGHT_LENGTH))
            .or_else(|| self.find_in_windows(STRAIGHT_LENGTH - 1))
            .or_else(|| self.find_in_windows(MIN_WINDOW))
            .unwrap_or(Draw::None)
    }

    /// highest window first
    fn find_in_windows(&self, n: usize) -> Option<Draw> {
        self.0.windows(n).rev().find_map(|window| match n {
            3 => Self::check_3(window),
            4 => Self::check_4(window),
            5 => Self::check_5(window),
            _ => unreachable!("no window of {} ranks", n),
        })
    }

    fn check_3(ranks: &[Rank]) -> Option<Draw> {
        assert!(ranks.len() == 3, "3-window over {} ranks", ranks.len());
        match Rank::gap(ranks[0], ranks[2]) {
            4 => Some(Draw::MissingTwoMiddle),
            3 => Some(Draw::MissingTwoCards),
            2 => Some(Draw::MissingTwoHighOrLow),
            _ => None,
        }
    }
    fn check_4(ranks: &[Rank]) -> Option<Draw> {
        assert!(ranks.len() == 4, "4-window over {} ranks", ranks.len());
        match Rank::gap(ranks[0], ranks[3]) {
            4 => Some(Draw::MissingOneMiddle),
            3 => Some(Draw::MissingHighOrLow),
            _ if ranks[3] == Rank::Ace && matches!(ranks[2], Rank::Four | Rank::Five) => {
                Some(Draw::MissingOneMiddle)
            }
            _ => None,
        }
    }
    fn check_5(ranks: &[Rank]) -> Option<Draw> {
        assert!(ranks.len() == 5, "5-window over {} ranks", ranks.len());
        match Rank::gap(ranks[0], ranks[4]) {
            4 => Some(Draw::Straight),
            _ if ranks[4] == Rank::Ace && ranks[3] == Rank::Five => Some(Draw::Straight),
            _ => None,
        }
    }
}

/// Draw for every RankMask index.
///
/// The table spans 14 bits so that any OR of rank bits
/// indexes it directly; the bit above the Ace is ignored.
pub struct StraightTable(Vec<Draw>);

impl StraightTable {
    pub fn lookup(&self, mask: RankMask) -> Draw {
        self.0[u16::from(mask) as usize]
    }
}

impl Table for StraightTable {
    type Entry = Draw;
    fn name() -> &'static str {
        "straights"
    }
    fn size() -> usize {
        crate::STRAIGHT_TABLE_SIZE
    }
    fn grow() -> Self {
        let table = (0..Self::size())
            .map(|index| RankMask::from(index as u16))
            .map(Evaluator::from)
            .map(|evaluator| evaluator.find_draw())
            .collect::<Vec<Draw>>();
        log::debug!(
            "{:<32}{:<32}",
            "straight draws found",
            table.iter().filter(|d| **d != Draw::None).count()
        );
        Self(table)
    }
    fn entries(&self) -> &[Draw] {
        &self.0
    }
    fn encode<W: std::io::Write>(entry: Draw, writer: &mut W) -> std::io::Result<()> {
        writer.write_u8(u8::from(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn draw(ranks: &str) -> Draw {
        Evaluator::from(RankMask::from(ranks)).find_draw()
    }

    #[test]
    fn broadway() {
        assert_eq!(draw("T J Q K A"), Draw::Straight);
    }

    #[test]
    fn wheel() {
        assert_eq!(draw("A 2 3 4 5"), Draw::Straight);
        let table = StraightTable::grow();
        assert_eq!(table.entries()[0b1_0000_0000_1111], Draw::Straight);
    }

    #[test]
    fn too_few_ranks() {
        assert_eq!(draw(""), Draw::None);
        assert_eq!(draw("7"), Draw::None);
        assert_eq!(draw("7 8"), Draw::None);
    }

    #[test]
    fn three_rank_windows() {
        assert_eq!(draw("2 3 4"), Draw::MissingTwoHighOrLow);
        assert_eq!(draw("2 3 5"), Draw::MissingTwoCards);
        assert_eq!(draw("2 4 6"), Draw::MissingTwoMiddle);
        assert_eq!(draw("2 4 7"), Draw::None);
    }

    #[test]
    fn four_rank_windows() {
        assert_eq!(draw("5 6 8 9"), Draw::MissingOneMiddle);
        assert_eq!(draw("5 6 7 8"), Draw::MissingHighOrLow);
        assert_eq!(draw("2 3 4 A"), Draw::MissingOneMiddle);
        assert_eq!(draw("2 3 5 A"), Draw::MissingOneMiddle);
        assert_eq!(draw("2 3 6 A"), Draw::MissingTwoMiddle);
    }

    #[test]
    fn four_ranks_fall_through_to_threes() {
        assert_eq!(draw("2 7 8 9"), Draw::MissingTwoHighOrLow);
        assert_eq!(draw("2 3 4 9"), Draw::MissingTwoHighOrLow);
        assert_eq!(draw("2 5 9 K"), Draw::None);
    }

    #[test]
    fn five_ranks_prefer_larger_windows() {
        assert_eq!(draw("4 5 6 7 Q"), Draw::MissingHighOrLow);
        assert_eq!(draw("2 5 6 8 9"), Draw::MissingOneMiddle);
        assert_eq!(draw("2 3 8 9 T"), Draw::MissingTwoHighOrLow);
    }

    #[test]
    fn six_and_seven_ranks_find_straights() {
        assert_eq!(draw("2 3 4 5 6 K"), Draw::Straight);
        assert_eq!(draw("2 9 T J Q K A"), Draw::Straight);
        assert_eq!(draw("2 4 6 8 T Q"), Draw::MissingTwoMiddle);
    }

    #[test]
    fn wheel_needs_ace_next_to_five() {
        assert_eq!(draw("A 2 3 4 5"), Draw::Straight);
        assert_eq!(draw("A 2 3 4 5 9"), Draw::MissingHighOrLow);
        assert_eq!(draw("A 2 3 4 5 9 J"), Draw::MissingHighOrLow);
    }

    #[test]
    fn highest_window_wins() {
        assert_eq!(draw("2 3 4 8 T J"), Draw::MissingTwoCards);
    }

    #[test]
    fn more_than_seven_ranks_is_none() {
        assert_eq!(draw("2 3 4 5 6 7 8 9"), Draw::None);
    }

    #[test]
    fn high_bit_is_ignored() {
        let table = StraightTable::grow();
        for _ in 0..256 {
            let mask = u16::from(RankMask::random());
            assert_eq!(table.entries()[mask as usize], table.entries()[(mask | 0x2000) as usize]);
        }
    }

    #[test]
    fn regrowth_is_identical() {
        assert_eq!(StraightTable::grow().bytes(), StraightTable::grow().bytes());
    }

    #[test]
    #[should_panic]
    fn window_length_is_checked() {
        let _ = Evaluator::check_5(&[Rank::Two, Rank::Three, Rank::Four]);
    }
}
