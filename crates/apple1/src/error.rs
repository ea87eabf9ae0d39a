//! Error handling (spec.md §7).
//!
//! Two kinds of error flow through the emulator: [`EmuError::Fatal`], which
//! aborts startup and maps to a process exit code, and [`EmuError::Recoverable`],
//! which is reported at the debugger prompt without mutating state or unwinding.

use std::fmt;

#[derive(Debug, Clone)]
pub enum EmuError {
    /// Unknown flag value, an unopenable mandatory file, a malformed ROM/RAM
    /// line. Printed to stderr; the process exits with status 1.
    Fatal(String),
    /// Symbol not found, bad breakpoint address, unopenable cassette file.
    /// Reported at the prompt; the caller stays in its current mode.
    Recoverable(String),
}

impl EmuError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            EmuError::Fatal(msg) | EmuError::Recoverable(msg) => msg,
        }
    }
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EmuError {}
