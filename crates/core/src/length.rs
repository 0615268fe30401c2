use crate::{next_term, ChainError, Term};

/// Number of terms in a chain, counting both the starting number and the terminal 1.
pub type ChainLen = u32;

/// Counts the terms of the chain starting at `number`, up to and including the first 1.
///
/// `chain_length(1)` is 1 and never steps. There is no bound on the number of steps: the loop
/// relies on the Collatz conjecture holding for `number`.
pub fn chain_length(number: Term) -> Result<ChainLen, ChainError> {
    if number == 0 {
        return Err(ChainError::ZeroTerm);
    }
    let mut n = number;
    let mut terms: ChainLen = 1;
    while n > 1 {
        n = next_term(n)?;
        terms += 1;
    }
    Ok(terms)
}
