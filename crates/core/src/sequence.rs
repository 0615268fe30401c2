use std::iter::FusedIterator;

use crate::{next_term, ChainError, Term};

/// Lazily walks the chain starting at a number, yielding every term up to and including 1.
///
/// After the terminal 1, or after the first error, the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Chain {
    next: Option<Result<Term, ChainError>>,
}

pub fn chain(start: Term) -> Chain {
    let first = if start == 0 {
        Err(ChainError::ZeroTerm)
    } else {
        Ok(start)
    };
    Chain { next: Some(first) }
}

impl Iterator for Chain {
    type Item = Result<Term, ChainError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Ok(term) = current {
            if term > 1 {
                self.next = Some(next_term(term));
            }
        }
        Some(current)
    }
}

impl FusedIterator for Chain {}
