use crate::cards::suit::Suit;
use crate::MAX_HAND_SIZE;
use crate::MIN_HAND_SIZE;

/// SuitSequences walks every ordered sequence of n suit labels,
/// 4^n of them, as an odometer over base-4 digits.
/// the first label turns slowest and the last label turns fastest,
/// so [c c c], [c c d], ..., [s s h], [s s s]
/// it is deterministic because it always iterates in the same order
/// it holds no sequences, only the odometer reading
pub struct SuitSequences {
    n: usize,
    next: usize,
}

impl SuitSequences {
    /// every legal hand size, largest first
    pub fn descending() -> impl Iterator<Item = Vec<Suit>> {
        (MIN_HAND_SIZE..=MAX_HAND_SIZE)
            .rev()
            .flat_map(SuitSequences::from)
    }
    pub fn combinations(&self) -> usize {
        1 << (2 * self.n)
    }
    fn exhausted(&self) -> bool {
        self.next >= self.combinations()
    }
    fn current(&self) -> Vec<Suit> {
        (0..self.n)
            .rev()
            .map(|digit| (self.next >> (2 * digit)) & 0b11)
            .map(|label| Suit::from(label as u8))
            .collect()
    }
}

impl Iterator for SuitSequences {
    type Item = Vec<Suit>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let sequence = self.current();
            self.next += 1;
            Some(sequence)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.combinations() - self.next;
        (remaining, Some(remaining))
    }
}

/// length is immutable and must be decided at construction
impl From<usize> for SuitSequences {
    fn from(n: usize) -> Self {
        assert!(
            (MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&n),
            "sequence length {} outside hand sizes",
            n
        );
        Self { n, next: 0 }
    }
}
