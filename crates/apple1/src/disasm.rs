//! Disassembler (spec component E).
//!
//! A 256-entry opcode table supplies a mnemonic and addressing mode for every
//! byte value, mirroring the legal/illegal split in [`cpu65::instruction::mos6502`]:
//! illegal opcodes disassemble as `nop` with one-byte `Imp` addressing, matching
//! how the CPU core executes them. `disasm_one` and `next_inst_addr` read memory
//! through [`Machine::peek`] so disassembly never perturbs device registers.

use crate::machine::Machine;

/// The nine 6502 addressing modes named in spec.md §4.B, plus the three
/// pseudo-modes (`ACC`, `IMP`, `REL`) used for formatting and instruction size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    Imm,
    Abs,
    AbsX,
    AbsY,
    Zp,
    ZpX,
    ZpY,
    Ind,
    IndX,
    IndY,
    Rel,
    Acc,
    Imp,
}

impl AddrMode {
    /// Instruction size in bytes, including the opcode (spec.md §4.B).
    #[must_use]
    pub const fn size(self) -> u16 {
        match self {
            AddrMode::Acc | AddrMode::Imp => 1,
            AddrMode::Imm
            | AddrMode::Zp
            | AddrMode::ZpX
            | AddrMode::ZpY
            | AddrMode::IndX
            | AddrMode::IndY
            | AddrMode::Rel => 2,
            AddrMode::Abs | AddrMode::AbsX | AddrMode::AbsY | AddrMode::Ind => 3,
        }
    }
}

use AddrMode::{Abs, AbsX, AbsY, Acc, Imm, Imp, Ind, IndX, IndY, Rel, Zp, ZpX, ZpY};

/// Mnemonic + addressing mode for every one of the 256 opcode byte values.
///
/// Entries not in the legal 151-entry NMOS set are `("nop", Imp)`, matching
/// the CPU core's "decode as 1-byte NOP" treatment of illegal opcodes
/// (spec.md §4.B: "No undocumented-opcode semantics").
#[rustfmt::skip]
const OPCODES: [(&str, AddrMode); 256] = [
    ("brk", Imp),  ("ora", IndX), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("ora", Zp),   ("asl", Zp),   ("nop", Imp),
    ("php", Imp),  ("ora", Imm),  ("asl", Acc),  ("nop", Imp),  ("nop", Imp),  ("ora", Abs),  ("asl", Abs),  ("nop", Imp),
    ("bpl", Rel),  ("ora", IndY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("ora", ZpX),  ("asl", ZpX),  ("nop", Imp),
    ("clc", Imp),  ("ora", AbsY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("ora", AbsX), ("asl", AbsX), ("nop", Imp),
    ("jsr", Abs),  ("and", IndX), ("nop", Imp),  ("nop", Imp),  ("bit", Zp),   ("and", Zp),   ("rol", Zp),   ("nop", Imp),
    ("plp", Imp),  ("and", Imm),  ("rol", Acc),  ("nop", Imp),  ("bit", Abs),  ("and", Abs),  ("rol", Abs),  ("nop", Imp),
    ("bmi", Rel),  ("and", IndY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("and", ZpX),  ("rol", ZpX),  ("nop", Imp),
    ("sec", Imp),  ("and", AbsY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("and", AbsX), ("rol", AbsX), ("nop", Imp),
    ("rti", Imp),  ("eor", IndX), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("eor", Zp),   ("lsr", Zp),   ("nop", Imp),
    ("pha", Imp),  ("eor", Imm),  ("lsr", Acc),  ("nop", Imp),  ("jmp", Abs),  ("eor", Abs),  ("lsr", Abs),  ("nop", Imp),
    ("bvc", Rel),  ("eor", IndY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("eor", ZpX),  ("lsr", ZpX),  ("nop", Imp),
    ("cli", Imp),  ("eor", AbsY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("eor", AbsX), ("lsr", AbsX), ("nop", Imp),
    ("rts", Imp),  ("adc", IndX), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("adc", Zp),   ("ror", Zp),   ("nop", Imp),
    ("pla", Imp),  ("adc", Imm),  ("ror", Acc),  ("nop", Imp),  ("jmp", Ind),  ("adc", Abs),  ("ror", Abs),  ("nop", Imp),
    ("bvs", Rel),  ("adc", IndY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("adc", ZpX),  ("ror", ZpX),  ("nop", Imp),
    ("sei", Imp),  ("adc", AbsY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("adc", AbsX), ("ror", AbsX), ("nop", Imp),
    ("nop", Imp),  ("sta", IndX), ("nop", Imp),  ("nop", Imp),  ("sty", Zp),   ("sta", Zp),   ("stx", Zp),   ("nop", Imp),
    ("dey", Imp),  ("nop", Imp),  ("txa", Imp),  ("nop", Imp),  ("sty", Abs),  ("sta", Abs),  ("stx", Abs),  ("nop", Imp),
    ("bcc", Rel),  ("sta", IndY), ("nop", Imp),  ("nop", Imp),  ("sty", ZpX),  ("sta", ZpX),  ("stx", ZpY),  ("nop", Imp),
    ("tya", Imp),  ("sta", AbsY), ("txs", Imp),  ("nop", Imp),  ("nop", Imp),  ("sta", AbsX), ("nop", Imp),  ("nop", Imp),
    ("ldy", Imm),  ("lda", IndX), ("ldx", Imm),  ("nop", Imp),  ("ldy", Zp),   ("lda", Zp),   ("ldx", Zp),   ("nop", Imp),
    ("tay", Imp),  ("lda", Imm),  ("tax", Imp),  ("nop", Imp),  ("ldy", Abs),  ("lda", Abs),  ("ldx", Abs),  ("nop", Imp),
    ("bcs", Rel),  ("lda", IndY), ("nop", Imp),  ("nop", Imp),  ("ldy", ZpX),  ("lda", ZpX),  ("ldx", ZpY),  ("nop", Imp),
    ("clv", Imp),  ("lda", AbsY), ("tsx", Imp),  ("nop", Imp),  ("ldy", AbsX), ("lda", AbsX), ("ldx", AbsY), ("nop", Imp),
    ("cpy", Imm),  ("cmp", IndX), ("nop", Imp),  ("nop", Imp),  ("cpy", Zp),   ("cmp", Zp),   ("dec", Zp),   ("nop", Imp),
    ("iny", Imp),  ("cmp", Imm),  ("dex", Imp),  ("nop", Imp),  ("cpy", Abs),  ("cmp", Abs),  ("dec", Abs),  ("nop", Imp),
    ("bne", Rel),  ("cmp", IndY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("cmp", ZpX),  ("dec", ZpX),  ("nop", Imp),
    ("cld", Imp),  ("cmp", AbsY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("cmp", AbsX), ("dec", AbsX), ("nop", Imp),
    ("cpx", Imm),  ("sbc", IndX), ("nop", Imp),  ("nop", Imp),  ("cpx", Zp),   ("sbc", Zp),   ("inc", Zp),   ("nop", Imp),
    ("inx", Imp),  ("sbc", Imm),  ("nop", Imp),  ("nop", Imp),  ("cpx", Abs),  ("sbc", Abs),  ("inc", Abs),  ("nop", Imp),
    ("beq", Rel),  ("sbc", IndY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("sbc", ZpX),  ("inc", ZpX),  ("nop", Imp),
    ("sed", Imp),  ("sbc", AbsY), ("nop", Imp),  ("nop", Imp),  ("nop", Imp),  ("sbc", AbsX), ("inc", AbsX), ("nop", Imp),
];

/// Looks up the mnemonic and addressing mode for `opcode`.
#[must_use]
pub fn decode(opcode: u8) -> (&'static str, AddrMode) {
    OPCODES[opcode as usize]
}

/// Disassembles the instruction at `addr`, returning its formatted text and size.
///
/// Mirrors spec.md §4.D's contract: reads up to 3 bytes via the bus (here,
/// [`Machine::peek`], which never triggers device side effects) and formats
/// hex/mnemonic/operand per the addressing-mode table.
#[must_use]
pub fn disasm_one(machine: &Machine, addr: u16) -> (String, u16) {
    let opcode = machine.peek(addr);
    let (mnemonic, mode) = decode(opcode);
    let size = mode.size();
    let b1 = machine.peek(addr.wrapping_add(1));
    let b2 = machine.peek(addr.wrapping_add(2));

    let hex_dump = match size {
        1 => format!("{opcode:02x}"),
        2 => format!("{opcode:02x} {b1:02x}"),
        _ => format!("{opcode:02x} {b1:02x} {b2:02x}"),
    };

    let operand = match mode {
        AddrMode::Imm => format!("#${b1:02x}"),
        AddrMode::Abs => format!("${:04x}", u16::from_le_bytes([b1, b2])),
        AddrMode::AbsX => format!("${:04x},X", u16::from_le_bytes([b1, b2])),
        AddrMode::AbsY => format!("${:04x},Y", u16::from_le_bytes([b1, b2])),
        AddrMode::Zp => format!("${b1:02x}"),
        AddrMode::ZpX => format!("${b1:02x},X"),
        AddrMode::ZpY => format!("${b1:02x},Y"),
        AddrMode::Ind => format!("(${:04x})", u16::from_le_bytes([b1, b2])),
        AddrMode::IndX => format!("(${b1:02x},X)"),
        AddrMode::IndY => format!("(${b1:02x}),Y"),
        AddrMode::Rel => {
            let target = addr
                .wrapping_add(2)
                .wrapping_add((b1 as i8) as i16 as u16);
            format!("${target:04x}")
        }
        AddrMode::Acc => "A".to_string(),
        AddrMode::Imp => String::new(),
    };

    let text = if operand.is_empty() {
        format!("{addr:04x}: {hex_dump:<8} {mnemonic}")
    } else {
        format!("{addr:04x}: {hex_dump:<8} {mnemonic} {operand}")
    };

    (text, size)
}

/// Returns the address of the instruction following the one at `addr`.
///
/// Used by the debugger's step-over (`n`) command.
#[must_use]
pub fn next_inst_addr(machine: &Machine, addr: u16) -> u16 {
    let opcode = machine.peek(addr);
    let (_, mode) = decode(opcode);
    addr.wrapping_add(mode.size())
}
