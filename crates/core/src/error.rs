use thiserror::Error;

use crate::Term;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ChainError {
    /// `3 * term + 1` does not fit in [`Term`].
    #[error("next term after {term} overflows a {}-bit term", Term::BITS)]
    Overflow { term: Term },
    #[error("collatz chains are only defined for positive starting numbers")]
    ZeroTerm,
}
