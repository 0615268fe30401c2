//! C ABI entry points for hosts that load this crate as a `cdylib` (a wasm runtime, a C
//! program). Everything crosses the boundary as a plain integer; failures are signalled with
//! 0, which is never a valid successor term, chain length, or packed result.

use crate::{chain_length, longest_chain, next_term, Term};

#[export_name = "nextTerm"]
pub extern "C" fn ffi_next_term(term: u64) -> u64 {
    next_term(term).unwrap_or(0)
}

#[export_name = "collatzChainLength"]
pub extern "C" fn ffi_chain_length(number: u64) -> u32 {
    chain_length(number).unwrap_or(0)
}

/// Returns the result of [`longest_chain`] packed as described by
/// [`LongestChain::pack`](crate::LongestChain::pack).
///
/// The bound is 32 bits wide: every chain started below 2^32 stays within a `u64` term, and
/// the winning number always fits the high half of the packed value.
#[export_name = "determineLongestChain"]
pub extern "C" fn ffi_determine_longest_chain(upper_bound: u32) -> u64 {
    longest_chain(Term::from(upper_bound))
        .ok()
        .and_then(|best| best.pack())
        .unwrap_or(0)
}
