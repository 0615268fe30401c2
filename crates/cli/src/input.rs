use collatz_core::Term;

pub const DEFAULT_UPPER_BOUND: Term = 1_000_000;

/// Parses an upper bound the way C's `atoi` reads a number: leading whitespace is skipped, an
/// optional `+` is accepted, and the leading run of decimal digits is taken while the rest is
/// ignored.
///
/// Anything that does not produce a non-negative `u64` this way (no digits, a `-` sign, a
/// value too large) falls back to 0, which makes the search a no-op.
pub fn parse_lenient(s: &str) -> Term {
    let s = s.trim_start_matches(|c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
    });
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}

/// Parses an upper bound that must be a plain non-negative decimal integer.
pub fn parse_strict(s: &str) -> Result<Term, String> {
    s.parse().map_err(|e| format!("invalid upper bound `{s}`: {e}"))
}
