//! Symbol table (spec component F): maps names to addresses for use in the
//! debugger's address-range grammar (`@reset`) and in disassembly listings.

use crate::error::EmuError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name-to-address map, first definition wins on duplicate names.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    by_name: BTreeMap<String, u16>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name -> addr` unless `name` is already defined.
    ///
    /// "First write wins" (spec.md 4.F): a later definition of a name already
    /// present is silently ignored rather than overwriting the earlier one.
    pub fn insert(&mut self, name: String, addr: u16) {
        self.by_name.entry(name).or_insert(addr);
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Parses one symbol-file line of the form `sym … name="NAME" val=0xHHHH, …`
/// (spec.md §6). Any line not starting with `sym`, or missing either
/// attribute, is ignored.
fn parse_symbol_line(line: &str) -> Option<(String, u16)> {
    let line = line.trim();
    if !line.starts_with("sym") {
        return None;
    }
    let name = extract_quoted(line, "name=")?;
    let val_str = extract_token(line, "val=")?;
    let digits = val_str
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_end_matches(',');
    let addr = u16::from_str_radix(digits, 16).ok()?;
    Some((name, addr))
}

/// Extracts the double-quoted value following `key` (e.g. `name="reset"`).
fn extract_quoted(line: &str, key: &str) -> Option<String> {
    let start = line.find(key)? + key.len();
    let rest = &line[start..];
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

/// Extracts the whitespace/comma-delimited token following `key` (e.g. `val=0xHHHH,`).
fn extract_token(line: &str, key: &str) -> Option<String> {
    let start = line.find(key)? + key.len();
    let rest = &line[start..];
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ',')
        .unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

/// Loads a symbol file into `table`, skipping malformed lines rather than
/// aborting the whole load (a single typo in a user-supplied symbol file
/// shouldn't prevent the rest of it from loading).
pub fn load_symbol_file(table: &mut SymbolTable, path: &Path) -> Result<(), EmuError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EmuError::Fatal(format!("unable to open symbol file {}: {e}", path.display()))
    })?;
    for line in contents.lines() {
        if let Some((name, addr)) = parse_symbol_line(line) {
            table.insert(name, addr);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_wins_on_duplicate_name() {
        let mut t = SymbolTable::new();
        t.insert("reset".to_string(), 0xFF00);
        t.insert("reset".to_string(), 0x0000);
        assert_eq!(t.lookup("reset"), Some(0xFF00));
    }

    #[test]
    fn parses_sym_line_with_quoted_name_and_hex_value() {
        assert_eq!(
            parse_symbol_line(r#"sym C type=lab name="RESET" val=0xFF00, len=0"#),
            Some(("RESET".to_string(), 0xFF00))
        );
        assert_eq!(
            parse_symbol_line(r#"sym C type=lab name="woz_echo" val=0xC17C,"#),
            Some(("woz_echo".to_string(), 0xC17C))
        );
    }

    #[test]
    fn skips_lines_not_starting_with_sym() {
        assert_eq!(parse_symbol_line(""), None);
        assert_eq!(parse_symbol_line("   "), None);
        assert_eq!(parse_symbol_line("; a comment"), None);
        assert_eq!(parse_symbol_line(r#"name="RESET" val=0xFF00"#), None);
    }

    #[test]
    fn skips_malformed_sym_lines() {
        assert_eq!(parse_symbol_line("sym C type=lab val=0xFF00"), None);
        assert_eq!(parse_symbol_line(r#"sym C name="RESET""#), None);
    }
}
