//! Host terminal interface (spec.md §6's "Host ↔ emulator boundary"),
//! implemented with `crossterm`'s raw-mode and non-blocking event polling.
//!
//! `Host` is the trait the main loop programs against; `CrosstermHost` is the
//! production implementation. Keeping the trait separate lets tests drive the
//! loop with a scripted host instead of a real terminal.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, Write};
use std::time::Duration;

/// The host-side operations the core depends on (spec.md §6).
pub trait Host {
    /// Non-blocking: returns one raw byte if a key is waiting, else `None`.
    fn poll_key(&mut self) -> Option<u8>;
    /// Blocking line read, used for cassette/batch-file prompts.
    fn read_line(&mut self) -> io::Result<String>;
    /// Toggles terminal raw mode.
    fn set_raw(&mut self, raw: bool) -> io::Result<()>;
    /// Monotonic tick count, `TICKS_PER_SEC` ticks per second.
    fn now(&self) -> u64;
}

/// Ticks per second for [`Host::now`], matching [`crate::machine::TICKS_PER_SEC`].
pub const TICKS_PER_SEC: u64 = crate::machine::TICKS_PER_SEC;

/// `crossterm`-backed terminal host.
pub struct CrosstermHost {
    epoch: std::time::Instant,
}

impl CrosstermHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }

    /// Translates a `crossterm` key event into a single raw host byte, if it
    /// maps to one. Modifier-bearing control characters (e.g. Ctrl-C) are
    /// reported as their control-code byte per spec.md §6.
    fn key_event_to_byte(event: KeyEvent) -> Option<u8> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                let upper = c.to_ascii_uppercase();
                if upper.is_ascii_alphabetic() {
                    Some((upper as u8) - b'A' + 1)
                } else {
                    None
                }
            }
            KeyCode::Char(c) => Some(c as u8),
            KeyCode::Enter => Some(0x0D),
            KeyCode::Backspace => Some(0x08),
            KeyCode::Esc => Some(0x1B),
            _ => None,
        }
    }
}

impl Default for CrosstermHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for CrosstermHost {
    fn poll_key(&mut self) -> Option<u8> {
        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                return Self::key_event_to_byte(key);
            }
        }
        None
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdout().flush()?;
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn set_raw(&mut self, raw: bool) -> io::Result<()> {
        if raw {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }

    fn now(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// RAII guard that restores cooked mode on drop, including on panic unwind,
/// per spec.md §5's resource-release requirement.
pub struct RawGuard<'a, H: Host> {
    host: &'a mut H,
}

impl<'a, H: Host> RawGuard<'a, H> {
    /// Enables raw mode and returns a guard that disables it on drop.
    pub fn acquire(host: &'a mut H) -> io::Result<Self> {
        host.set_raw(true)?;
        Ok(Self { host })
    }
}

impl<H: Host> Drop for RawGuard<'_, H> {
    fn drop(&mut self) {
        let _ = self.host.set_raw(false);
    }
}
