use crate::{ChainError, Term};

/// The largest odd term whose successor `3 * term + 1` still fits in [`Term`].
pub const MAX_SAFE_ODD_TERM: Term = (Term::MAX - 1) / 3 - 1;

/// Applies one Collatz step: `t / 2` for even `t`, `3t + 1` for odd `t`.
///
/// The odd branch is computed with checked arithmetic, so a term that would wrap is reported
/// as [`ChainError::Overflow`] instead of silently producing a wrong chain.
#[inline]
pub fn next_term(term: Term) -> Result<Term, ChainError> {
    if term % 2 == 0 {
        return Ok(term / 2);
    }
    term.checked_mul(3)
        .and_then(|t| t.checked_add(1))
        .ok_or(ChainError::Overflow { term })
}
