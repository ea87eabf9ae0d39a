//! Text-format ROM/RAM loader and the `monitor.rom`/`wozaci.rom` search path
//! (spec.md §6's "Text ROM/RAM file format", supplemented per SPEC_FULL.md
//! from `original_source/froot1.c`'s `load_mem`).
//!
//! Each line is `AAAA: BB BB BB ...`: a 4-hex-digit address, a colon, then up
//! to 16 whitespace-separated hex bytes. Non-hex-digit, non-colon characters
//! (spaces, stray letters) are otherwise ignored rather than rejected, matching
//! the original parser's character-by-character scan.

use crate::error::EmuError;
use std::fs;
use std::path::{Path, PathBuf};

/// One parsed line: a starting address, the decoded byte row, and whether it
/// should be marked read-only (ROM) or writable (RAM) once applied.
#[derive(Debug, PartialEq, Eq)]
pub struct Row {
    pub addr: u16,
    pub bytes: Vec<u8>,
}

fn hex_nybble(ch: char) -> Option<u8> {
    ch.to_digit(16).map(|d| d as u8)
}

/// Parses one line of the text ROM/RAM format into a `Row`.
///
/// Blank lines parse to an empty row at address 0 and are simply skipped by
/// the caller (no bytes to apply). Malformed lines return the exact
/// diagnostic `original_source/froot1.c` produces, naming `filename` and the
/// offending `line`.
fn parse_line(filename: &str, line: &str) -> Result<Row, EmuError> {
    let mut addr: u32 = 0;
    let mut addr_len = 0u8;
    let mut got_colon = false;
    let mut curr_byte: u8 = 0;
    let mut byte_len = 0u8;
    let mut row = Vec::with_capacity(16);

    for ch in line.chars() {
        if let Some(nybble) = hex_nybble(ch) {
            if addr_len == 4 && !got_colon {
                return Err(EmuError::Fatal(format!(
                    "No : after 4-digit address in {filename} at line {line}"
                )));
            }
            if addr_len < 4 {
                addr = (addr << 4) + u32::from(nybble);
                addr_len += 1;
            } else {
                if row.len() == 16 {
                    return Err(EmuError::Fatal(format!(
                        "Got more than 16 bytes in {filename} at line {line}"
                    )));
                }
                curr_byte = (curr_byte << 4) + nybble;
                byte_len += 1;
                if byte_len == 2 {
                    row.push(curr_byte);
                    curr_byte = 0;
                    byte_len = 0;
                }
            }
        } else if ch == ':' {
            if addr_len < 4 {
                return Err(EmuError::Fatal(format!(
                    "Got : before 4-digit address in {filename} at {line}"
                )));
            } else if got_colon {
                return Err(EmuError::Fatal(format!(
                    "Got extra : in {filename} at {line}"
                )));
            }
            got_colon = true;
        }
        // any other character (whitespace, stray text) is ignored
    }

    Ok(Row {
        addr: addr as u16,
        bytes: row,
    })
}

/// Reads `path` and applies each line's bytes to `apply`, in file order.
///
/// `apply(addr, bytes)` is expected to be [`crate::machine::Machine::load`]
/// partially applied with `read_only`; kept generic here so tests can observe
/// the parsed rows directly instead of going through a `Machine`.
pub fn load_text_file(
    path: &Path,
    mut apply: impl FnMut(u16, &[u8]),
) -> Result<(), EmuError> {
    let filename = path.display().to_string();
    let contents = fs::read_to_string(path)
        .map_err(|e| EmuError::Fatal(format!("Can't open file {filename}: {e}")))?;

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_line(&filename, line)?;
        apply(row.addr, &row.bytes);
    }
    Ok(())
}

/// Locates `rom_name` first in the current directory, then in a platform data
/// directory (`$HOME/.apple1` on Unix, `%APPDATA%\apple1` on Windows).
#[must_use]
pub fn rom_search_path(rom_name: &str) -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join(rom_name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    #[cfg(windows)]
    let data_dir = std::env::var("APPDATA").ok().map(|p| PathBuf::from(p).join("apple1"));
    #[cfg(not(windows))]
    let data_dir = std::env::var("HOME").ok().map(|p| PathBuf::from(p).join(".apple1"));

    data_dir.map(|d| d.join(rom_name)).filter(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_address_and_row_bytes() {
        let row = parse_line("monitor.rom", "FF00: A9 00 8D 12 D0").unwrap();
        assert_eq!(row.addr, 0xFF00);
        assert_eq!(row.bytes, vec![0xA9, 0x00, 0x8D, 0x12, 0xD0]);
    }

    #[test]
    fn rejects_digit_after_address_with_no_colon() {
        let err = parse_line("f.rom", "FF0000").unwrap_err();
        assert!(err.message().contains("No :"), "{err}");
    }

    #[test]
    fn rejects_colon_before_complete_address() {
        let err = parse_line("f.rom", "FF:00").unwrap_err();
        assert!(err.message().contains("Got : before"), "{err}");
    }

    #[test]
    fn rejects_extra_colon() {
        let err = parse_line("f.rom", "FF00::AA").unwrap_err();
        assert!(err.message().contains("Got extra"), "{err}");
    }

    #[test]
    fn rejects_more_than_sixteen_bytes() {
        let mut line = String::from("0000:");
        for _ in 0..17 {
            line.push_str(" AA");
        }
        let err = parse_line("f.rom", &line).unwrap_err();
        assert!(err.message().contains("more than 16 bytes"), "{err}");
    }

    #[test]
    fn ignores_non_hex_non_colon_characters() {
        // "zqxy" are outside 0-9a-fA-F, so they contribute no extra bytes;
        // whitespace is likewise a no-op in the scan.
        let row = parse_line("f.rom", "  0200: A9 42  zqxy zqxy").unwrap();
        assert_eq!(row.addr, 0x0200);
        assert_eq!(row.bytes, vec![0xA9, 0x42]);
    }
}
