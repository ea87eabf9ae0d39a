//! Interactive debugger (spec component F): between-instruction REPL with
//! step / step-over / continue / breakpoints / disassembly / memory dump /
//! symbol resolution (spec.md §4.E).

use crate::disasm::{disasm_one, next_inst_addr};
use crate::error::EmuError;
use crate::machine::Machine;
use crate::symbols::SymbolTable;
use core65::Byte;
use cpu65::Cpu;

/// The debugger's three-state machine (spec.md §4.E).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugState {
    /// Disabled entirely; hooks and the CPU run with no per-step overhead.
    Off,
    /// Prompting for a command between instructions.
    Paused,
    /// Free execution until a breakpoint (including a temporary step-over one) fires.
    Running,
}

/// Bytes disassembled by default when `d` is given no range.
const DEFAULT_DISASM_SIZE: u16 = 20;

pub struct Debugger {
    state: DebugState,
    /// The single-shot breakpoint installed by `n` (step-over); at most one
    /// at a time, per spec.md §3's "Breakpoint set".
    temp_breakpoint: Option<u16>,
}

impl Debugger {
    #[must_use]
    pub fn new(start_active: bool) -> Self {
        Self {
            state: if start_active {
                DebugState::Paused
            } else {
                DebugState::Off
            },
            temp_breakpoint: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> DebugState {
        self.state
    }

    /// Requests debugger entry (Ctrl-D, or a breakpoint hit during `Running`).
    pub fn pause(&mut self) {
        if self.state != DebugState::Off {
            self.state = DebugState::Paused;
        }
    }

    /// Externally activates the debugger (e.g. from an `Off` state via Ctrl-D).
    pub fn activate(&mut self) {
        self.state = DebugState::Paused;
    }

    /// Called once per main-loop iteration after `cpu.step()`, while
    /// `Running`. Transitions to `Paused` if `cpu.pc` carries a breakpoint
    /// flag, clearing a spent temporary step-over breakpoint.
    pub fn check_breakpoint(&mut self, cpu: &Cpu<Machine>, machine: &mut Machine) {
        if self.state != DebugState::Running {
            return;
        }
        let pc = u16::from(cpu.pc);
        if machine.is_breakpoint(pc) {
            if self.temp_breakpoint == Some(pc) {
                machine.clear_breakpoint(pc);
                self.temp_breakpoint = None;
            }
            self.state = DebugState::Paused;
        }
    }

    /// Prints the register file and the single upcoming instruction, as
    /// required on debugger entry (spec.md §4.E, "Activation").
    pub fn print_status(&self, cpu: &Cpu<Machine>, machine: &Machine) {
        let pc = u16::from(cpu.pc);
        println!(
            "A={:02x} X={:02x} Y={:02x} SP={:02x} P={:02x} PC={:04x}",
            u8::from(cpu.a),
            u8::from(cpu.x),
            u8::from(cpu.y),
            u8::from(cpu.sp),
            u8::from(Byte::from(cpu.p)),
            pc
        );
        let (text, _) = disasm_one(machine, pc);
        println!("{text}");
    }

    /// Dispatches one command line (spec.md §4.E's command table). A command
    /// that steps the CPU does so itself and remains `Paused`; `n`/`c` hand
    /// control to `Running` without stepping here.
    pub fn handle_command(
        &mut self,
        line: &str,
        cpu: &mut Cpu<Machine>,
        machine: &mut Machine,
        symbols: &SymbolTable,
    ) {
        let line = line.trim();
        let mut parts = line.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or("");
        let args = parts.next().unwrap_or("").trim();

        match cmd {
            "s" | "" => {
                cpu.step(machine);
            }
            "n" => {
                let target = next_inst_addr(machine, u16::from(cpu.pc));
                machine.set_breakpoint(target);
                self.temp_breakpoint = Some(target);
                self.state = DebugState::Running;
            }
            "c" => {
                self.state = DebugState::Running;
            }
            "b" => match self.resolve_addr_or_pc(args, cpu, symbols) {
                Ok(addr) => machine.set_breakpoint(addr),
                Err(e) => println!("{e}"),
            },
            "cb" => match self.resolve_addr_or_pc(args, cpu, symbols) {
                Ok(addr) => machine.clear_breakpoint(addr),
                Err(e) => println!("{e}"),
            },
            "ca" => machine.clear_all_breakpoints(),
            "lb" => {
                for addr in machine.breakpoints() {
                    println!("{addr:04x}");
                }
            }
            "d" => match parse_addr_range(args, DEFAULT_DISASM_SIZE, u16::from(cpu.pc), symbols) {
                Ok((start, end)) => print_disassembly(machine, start, end),
                Err(e) => println!("{e}"),
            },
            "m" => {
                if args.is_empty() {
                    println!("usage: m <range>");
                } else {
                    match parse_addr_range(args, 16, u16::from(cpu.pc), symbols) {
                        Ok((start, end)) => print_memory_dump(machine, start, end),
                        Err(e) => println!("{e}"),
                    }
                }
            }
            "end" => self.state = DebugState::Off,
            "h" | "help" => print_help(),
            other => println!("unrecognized command: {other}"),
        }
    }

    fn resolve_addr_or_pc(
        &self,
        args: &str,
        cpu: &Cpu<Machine>,
        symbols: &SymbolTable,
    ) -> Result<u16, EmuError> {
        if args.is_empty() {
            Ok(u16::from(cpu.pc))
        } else {
            parse_atom(args, symbols)
        }
    }
}

fn print_help() {
    println!("s (or empty)  step one instruction");
    println!("n             step over");
    println!("c             continue to next breakpoint");
    println!("b [addr]      set breakpoint (default: current PC)");
    println!("cb [addr]     clear breakpoint (default: current PC)");
    println!("ca            clear all breakpoints");
    println!("lb            list breakpoints");
    println!("d [range]     disassemble range");
    println!("m range       hex/ASCII memory dump");
    println!("end           leave debugger");
    println!("h, help       this text");
}

fn print_disassembly(machine: &Machine, start: u16, end: u16) {
    let mut addr = start;
    while addr < end {
        let (text, size) = disasm_one(machine, addr);
        println!("{text}");
        addr = addr.wrapping_add(size);
        if size == 0 {
            break;
        }
    }
}

/// Hex+ASCII dump, 16 bytes per row, an extra space splitting bytes 7/8, and
/// an ASCII column of printable low-7-bit characters or `.` (spec.md §4.E).
///
/// The original's row-start check for "is this address 16-aligned" reads
/// `start_addr & 0xf != 0`, which due to operator precedence is actually
/// `start_addr & (0xf != 0)` i.e. `start_addr & 1` — a likely source bug
/// (spec.md §9, Open Question 1). Rows here are always aligned to 16-byte
/// boundaries using the intended `(start_addr & 0xf) != 0` semantics, with
/// out-of-range cells in the first/last row rendered as blanks.
fn print_memory_dump(machine: &Machine, start: u16, end: u16) {
    let mut row_base = start & !0xF;
    while row_base < end {
        let mut hex = String::new();
        let mut ascii = String::new();
        for col in 0..16u16 {
            let addr = row_base.wrapping_add(col);
            if col == 8 {
                hex.push(' ');
            }
            if addr >= start && addr < end {
                let byte = machine.peek(addr);
                hex.push_str(&format!("{byte:02x} "));
                let printable = byte & 0x7F;
                ascii.push(if (0x20..0x7F).contains(&printable) {
                    printable as char
                } else {
                    '.'
                });
            } else {
                hex.push_str("   ");
                ascii.push(' ');
            }
        }
        println!("{row_base:04x}: {hex} {ascii}");
        row_base = row_base.wrapping_add(16);
        if row_base == 0 {
            break;
        }
    }
}

/// Parses an address-range argument string per spec.md §4.E's grammar:
/// `<atom>` (paired with `default_size`), `<atom> <sep> <atom>` (explicit
/// end), or `<atom> + <atom>` (end = start + length). Separators: space,
/// `.`, `,`, `-`.
fn parse_addr_range(
    s: &str,
    default_size: u16,
    pc: u16,
    symbols: &SymbolTable,
) -> Result<(u16, u16), EmuError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok((pc, pc.wrapping_add(default_size)));
    }

    if let Some(plus_idx) = s.find('+') {
        let start = parse_atom(s[..plus_idx].trim(), symbols)?;
        let len = parse_atom(s[plus_idx + 1..].trim(), symbols)?;
        return Ok((start, start.wrapping_add(len)));
    }

    let atoms: Vec<&str> = s
        .split(|c: char| c == ' ' || c == '.' || c == ',' || c == '-')
        .filter(|p| !p.is_empty())
        .collect();

    match atoms.as_slice() {
        [one] => {
            let start = parse_atom(one, symbols)?;
            Ok((start, start.wrapping_add(default_size)))
        }
        [start, end] => {
            let start = parse_atom(start, symbols)?;
            let end = parse_atom(end, symbols)?;
            Ok((start, end))
        }
        _ => Err(EmuError::Recoverable(format!("bad address range: {s}"))),
    }
}

/// Parses one grammar atom: 1–4 hex digits, or `@name` resolved via `symbols`.
fn parse_atom(s: &str, symbols: &SymbolTable) -> Result<u16, EmuError> {
    let s = s.trim();
    if let Some(name) = s.strip_prefix('@') {
        return symbols
            .lookup(name)
            .ok_or_else(|| EmuError::Recoverable(format!("unknown symbol @{name}")));
    }
    if s.is_empty() || s.len() > 4 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EmuError::Recoverable(format!("bad address: {s}")));
    }
    u16::from_str_radix(s, 16).map_err(|_| EmuError::Recoverable(format!("bad address: {s}")))
}
