//! Keyboard byte translation (spec.md §6, "Keyboard translation").
//!
//! Host bytes arrive raw from [`crate::terminal::Host::poll_key`]; `translate`
//! turns one into a [`KeyAction`] the main loop dispatches on, before the byte
//! (if any) is pushed into the keyboard register.

/// What the main loop should do with one translated host byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Push this byte into `char_pending`.
    Push(u8),
    /// Restore cooked mode and exit the process (Ctrl-C).
    Exit,
    /// Enter the debugger (Ctrl-D).
    EnterDebugger,
    /// Issue a CPU reset (Ctrl-R).
    Reset,
    /// Prompt for a batch-input file and feed subsequent keystrokes from it (Ctrl-L).
    LoadBatchFile,
}

/// Translates one raw host byte per spec.md §6's table.
#[must_use]
pub fn translate(byte: u8) -> KeyAction {
    match byte {
        0x03 => KeyAction::Exit,
        0x04 => KeyAction::EnterDebugger,
        0x12 => KeyAction::Reset,
        0x0C => KeyAction::LoadBatchFile,
        0x0A => KeyAction::Push(0x0D),
        0x08 | 0x7F => KeyAction::Push(0x08),
        b'a'..=b'z' => KeyAction::Push(byte.to_ascii_uppercase()),
        other => KeyAction::Push(other),
    }
}

/// Translates one byte read from a Ctrl-L batch file: LF maps to CR, every
/// other byte passes straight to the keyboard register (spec.md SPEC_FULL.md
/// "Ctrl-L batch-input file").
#[must_use]
pub fn translate_batch_byte(byte: u8) -> u8 {
    if byte == 0x0A { 0x0D } else { byte }
}
