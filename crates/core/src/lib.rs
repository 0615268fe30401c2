//! Brute-force search for the starting number below a bound with the longest Collatz chain.
//!
//! ```
//! use collatz_core::{longest_chain, LongestChain};
//!
//! assert_eq!(longest_chain(7), Ok(LongestChain::new(7, 17)));
//! ```

mod error;
pub use error::*;

mod length;
pub use length::*;

mod search;
pub use search::*;

mod sequence;
pub use sequence::*;

mod step;
pub use step::*;

pub mod ffi;

/// A single term of a chain. Wide enough that `3t + 1` cannot overflow for any chain started
/// below 2^32.
pub type Term = u64;
