use std::{io::Write, time::Instant};

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use collatz_core::{chain, longest_chain, LongestChain, Term};
use eyre::Result;
use serde::Serialize;
use tracing::info;

use crate::{
    input::{parse_lenient, parse_strict, DEFAULT_UPPER_BOUND},
    COLLATZ_VERSION_MESSAGE,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "collatz",
    about = "Find the number with the longest Collatz chain among 1..=UPPER_BOUND",
    version = COLLATZ_VERSION_MESSAGE
)]
pub struct SearchCmd {
    #[arg(
        value_name = "UPPER_BOUND",
        allow_hyphen_values = true,
        help = "Number of candidates to examine, starting from 1 [default: 1000000]"
    )]
    upper_bound: Option<String>,

    #[arg(long, help = "Reject a malformed upper bound instead of reading it as 0")]
    strict: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, help = "Also print every term of the winning chain")]
    print_chain: bool,

    #[arg(short, long, help = "Log progress to stderr")]
    pub verbose: bool,
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    best: LongestChain,
    upper_bound: Term,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<Vec<Term>>,
}

impl SearchCmd {
    /// Resolves the positional argument. In strict mode a malformed value is a usage error.
    pub fn upper_bound(&self) -> Result<Term, clap::Error> {
        let Some(raw) = &self.upper_bound else {
            return Ok(DEFAULT_UPPER_BOUND);
        };
        if self.strict {
            parse_strict(raw)
                .map_err(|msg| Self::command().error(ErrorKind::ValueValidation, msg))
        } else {
            Ok(parse_lenient(raw))
        }
    }

    pub fn run(&self, upper_bound: Term, out: &mut impl Write) -> Result<LongestChain> {
        let start = Instant::now();
        let best = longest_chain(upper_bound)?;
        info!(
            upper_bound,
            number = best.number,
            length = best.length,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        let terms = if self.print_chain {
            Some(chain(best.number).collect::<Result<Vec<_>, _>>()?)
        } else {
            None
        };

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{best}")?;
                if let Some(terms) = &terms {
                    let terms: Vec<String> = terms.iter().map(Term::to_string).collect();
                    writeln!(out, "{}", terms.join(" "))?;
                }
            }
            OutputFormat::Json => {
                let report = Report {
                    best,
                    upper_bound,
                    chain: terms,
                };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn parse(args: &[&str]) -> SearchCmd {
        SearchCmd::try_parse_from(std::iter::once("collatz").chain(args.iter().copied())).unwrap()
    }

    fn run(args: &[&str]) -> (LongestChain, String) {
        let cmd = parse(args);
        let upper_bound = cmd.upper_bound().unwrap();
        let mut out = Vec::new();
        let best = cmd.run(upper_bound, &mut out).unwrap();
        (best, String::from_utf8(out).unwrap())
    }

    #[test_case(&[], DEFAULT_UPPER_BOUND)]
    #[test_case(&["7"], 7)]
    #[test_case(&["garbage"], 0)]
    #[test_case(&["-3"], 0)]
    #[test_case(&["--strict", "15"], 15)]
    fn test_upper_bound(args: &[&str], expected: Term) {
        assert_eq!(parse(args).upper_bound().unwrap(), expected);
    }

    #[test]
    fn test_strict_rejects_garbage() {
        let cmd = SearchCmd::try_parse_from(["collatz", "--strict", "12abc"]).unwrap();
        let err = cmd.upper_bound().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_text_output() {
        let (best, out) = run(&["7"]);
        assert_eq!(best, LongestChain::new(7, 17));
        assert_eq!(out, "Number with longest chain was 7 with 17 terms.\n");
    }

    #[test]
    fn test_zero_bound_output() {
        let (_, out) = run(&["0"]);
        assert_eq!(out, "Number with longest chain was 1 with 1 terms.\n");
    }

    #[test]
    fn test_print_chain() {
        let (_, out) = run(&["3", "--print-chain"]);
        assert_eq!(
            out,
            "Number with longest chain was 3 with 8 terms.\n3 10 5 16 8 4 2 1\n"
        );
    }

    #[test]
    fn test_json_output() {
        let (_, out) = run(&["7", "--format", "json"]);
        assert_eq!(out, "{\"number\":7,\"length\":17,\"upper_bound\":7}\n");

        let (_, out) = run(&["2", "--format", "json", "--print-chain"]);
        assert_eq!(
            out,
            "{\"number\":2,\"length\":2,\"upper_bound\":2,\"chain\":[2,1]}\n"
        );
    }
}
