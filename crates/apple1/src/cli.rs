//! Command-line surface (spec.md §6, "CLI surface"). `clap` derive parses
//! flag shape; `-mem`/`-cassette`'s restricted string values (`Nk`/`full`,
//! `y`/`n`) are validated by hand after parsing, since clap's enum parsing
//! is a poor fit for that original flag vocabulary.
//!
//! spec.md's flags are single-dash and multi-character (`-mem`, `-cassette`,
//! `-rom`, ...), matching `original_source/froot1.c`'s `!strcmp(argv[i],
//! "-mem")`-style parsing. clap's derive `long` only ever accepts `--`, so
//! [`parse`] rewrites single-dash multi-character tokens to double-dash
//! before handing argv to clap; single-character flags (`-d`, `-h`) already
//! work unchanged as clap short options and are left alone.

use crate::error::EmuError;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "An interactive Apple-1-class 6502 emulator", long_about = None)]
pub struct Cli {
    /// RAM size: "Nk" for 1..64 (in KiB) or "full" for the whole 64 KiB.
    #[arg(long = "mem", default_value = "full")]
    pub mem: String,

    /// Enable cassette hooks and `wozaci.rom` preload: "y" or "n".
    #[arg(long = "cassette", default_value = "n")]
    pub cassette: String,

    /// Comma-separated list of text ROM files to load read-only.
    #[arg(long = "rom", value_delimiter = ',')]
    pub rom: Vec<String>,

    /// Comma-separated list of text RAM files to load writable.
    #[arg(long = "ram", value_delimiter = ',')]
    pub ram: Vec<String>,

    /// Comma-separated list of symbol files to load.
    #[arg(long = "sym", value_delimiter = ',')]
    pub sym: Vec<String>,

    /// Start in the debugger.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Output throttle in baud; 0 = unthrottled.
    #[arg(long = "baud", default_value_t = 0)]
    pub baud: u32,

    /// Column wrap width; 0 = no wrap.
    #[arg(long = "cols", default_value_t = 0)]
    pub cols: u16,
}

/// Parses `std::env::args()` into a [`Cli`], first normalizing spec.md's
/// single-dash long flags into the double-dash form clap's derive expects.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse_from(normalize_args(std::env::args()))
}

/// Rewrites single-dash, multi-character tokens (`-mem` -> `--mem`) so clap's
/// derive `long` matching accepts spec.md's documented flag spelling.
/// Single-character tokens (`-d`, `-h`) and already-double-dash tokens
/// (`--help`, `--version`) pass through unchanged, as does argv[0].
fn normalize_args<I: Iterator<Item = String>>(args: I) -> Vec<String> {
    args.enumerate()
        .map(|(i, arg)| {
            if i > 0 && arg.len() > 2 && arg.starts_with('-') && !arg.starts_with("--") {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

/// RAM size resolved from `-mem`'s restricted vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemSize {
    /// All 64 KiB is RAM.
    Full,
    /// `limit` bytes of RAM; everything at or above becomes ROM (spec.md §6).
    Limited { limit: u32 },
}

/// Validates and resolves `-mem`'s value (spec.md §6: `Nk` for 1..64, or `full`).
pub fn parse_mem(value: &str) -> Result<MemSize, EmuError> {
    if value.eq_ignore_ascii_case("full") {
        return Ok(MemSize::Full);
    }
    let digits = value
        .strip_suffix(['k', 'K'])
        .ok_or_else(|| EmuError::Fatal(format!("unknown -mem value: {value}")))?;
    let n: u32 = digits
        .parse()
        .map_err(|_| EmuError::Fatal(format!("unknown -mem value: {value}")))?;
    if !(1..=64).contains(&n) {
        return Err(EmuError::Fatal(format!(
            "unknown -mem value: {value} (must be 1..64)"
        )));
    }
    Ok(MemSize::Limited { limit: n * 1024 })
}

/// Validates and resolves `-cassette`'s value (spec.md §6: `y`/`n`).
pub fn parse_cassette(value: &str) -> Result<bool, EmuError> {
    match value {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(EmuError::Fatal(format!("unknown -cassette value: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_mem() {
        assert_eq!(parse_mem("full").unwrap(), MemSize::Full);
        assert_eq!(parse_mem("FULL").unwrap(), MemSize::Full);
    }

    #[test]
    fn parses_kilobyte_mem() {
        assert_eq!(
            parse_mem("4k").unwrap(),
            MemSize::Limited { limit: 4 * 1024 }
        );
    }

    #[test]
    fn rejects_out_of_range_mem() {
        assert!(parse_mem("0k").is_err());
        assert!(parse_mem("65k").is_err());
    }

    #[test]
    fn rejects_unknown_mem_value() {
        assert!(parse_mem("bogus").is_err());
    }

    #[test]
    fn parses_cassette_flag() {
        assert!(parse_cassette("y").unwrap());
        assert!(!parse_cassette("n").unwrap());
        assert!(parse_cassette("yes").is_err());
    }

    #[test]
    fn normalizes_single_dash_long_flags_to_double_dash() {
        let argv = ["apple1", "-mem", "4k", "-cassette", "y"].map(String::from);
        assert_eq!(
            normalize_args(argv.into_iter()),
            vec!["apple1", "--mem", "4k", "--cassette", "y"]
        );
    }

    #[test]
    fn leaves_short_flags_and_program_name_untouched() {
        let argv = ["apple1", "-mem", "full", "-d", "-h"].map(String::from);
        assert_eq!(
            normalize_args(argv.into_iter()),
            vec!["apple1", "--mem", "full", "-d", "-h"]
        );
    }

    #[test]
    fn leaves_already_double_dash_flags_untouched() {
        let argv = ["apple1", "--help"].map(String::from);
        assert_eq!(normalize_args(argv.into_iter()), vec!["apple1", "--help"]);
    }

    #[test]
    fn full_cli_parses_with_single_dash_flags() {
        let argv = ["apple1", "-mem", "4k", "-cassette", "y", "-baud", "300", "-d"]
            .map(String::from);
        let cli = Cli::parse_from(normalize_args(argv.into_iter()));
        assert_eq!(cli.mem, "4k");
        assert_eq!(cli.cassette, "y");
        assert_eq!(cli.baud, 300);
        assert!(cli.debug);
    }
}
