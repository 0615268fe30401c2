use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{chain_length, ChainError, ChainLen, Term};

/// The starting number with the longest chain seen so far, together with that chain's length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LongestChain {
    pub number: Term,
    pub length: ChainLen,
}

impl LongestChain {
    /// 1 is its own chain of length 1, so every search starts from here.
    pub const INITIAL: Self = Self {
        number: 1,
        length: 1,
    };

    pub fn new(number: Term, length: ChainLen) -> Self {
        Self { number, length }
    }

    /// Packs the pair into a single integer for hosts that only exchange scalars: the number
    /// in the high 32 bits and the length in the low 32 bits.
    ///
    /// Returns `None` if `number` does not fit in 32 bits.
    pub fn pack(self) -> Option<u64> {
        let number = u32::try_from(self.number).ok()?;
        Some((u64::from(number) << 32) | u64::from(self.length))
    }

    pub fn unpack(packed: u64) -> Self {
        Self {
            number: packed >> 32,
            length: packed as u32,
        }
    }
}

impl Default for LongestChain {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Display for LongestChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number with longest chain was {} with {} terms.",
            self.number, self.length
        )
    }
}

/// Finds the number in `1..=upper_bound` with the longest chain.
///
/// Ties keep the smallest number, since a candidate only replaces the current best when its
/// chain is strictly longer. An `upper_bound` of 0 examines nothing and returns
/// [`LongestChain::INITIAL`].
#[instrument(level = "debug")]
pub fn longest_chain(upper_bound: Term) -> Result<LongestChain, ChainError> {
    let mut best = LongestChain::INITIAL;
    for number in 1..=upper_bound {
        let length = chain_length(number)?;
        if length > best.length {
            debug!(number, length, "new longest chain");
            best = LongestChain { number, length };
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 1, 1)]
    #[test_case(1, 1, 1)]
    #[test_case(2, 2, 2)]
    #[test_case(3, 3, 8)]
    #[test_case(7, 7, 17)]
    #[test_case(8, 7, 17)]
    #[test_case(10, 9, 20)]
    #[test_case(100, 97, 119)]
    #[test_case(1_000, 871, 179)]
    fn test_longest_chain(upper_bound: Term, number: Term, length: ChainLen) {
        assert_eq!(
            longest_chain(upper_bound),
            Ok(LongestChain::new(number, length))
        );
    }

    #[test]
    fn test_first_of_equal_lengths_wins() {
        // 12 and 13 both have 10 terms, and neither beats 9.
        assert_eq!(chain_length(12), chain_length(13));
        assert_eq!(longest_chain(13), Ok(LongestChain::new(9, 20)));
        // 18 and 19 both have 21 terms; 18 reaches it first.
        assert_eq!(chain_length(18), Ok(21));
        assert_eq!(chain_length(19), Ok(21));
        assert_eq!(longest_chain(19), Ok(LongestChain::new(18, 21)));
    }

    #[test_log::test]
    fn test_search_is_repeatable() {
        assert_eq!(longest_chain(5_000), longest_chain(5_000));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LongestChain::new(837_799, 525).to_string(),
            "Number with longest chain was 837799 with 525 terms."
        );
    }

    #[test]
    fn test_pack() {
        let best = LongestChain::new(837_799, 525);
        let packed = best.pack().unwrap();
        assert_eq!(packed, (837_799 << 32) | 525);
        assert_eq!(LongestChain::unpack(packed), best);
        assert_eq!(LongestChain::new(1 << 32, 1).pack(), None);
    }
}
